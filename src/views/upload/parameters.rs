use chrono::{Datelike, Local};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::utils::{year_options, MONTHS};

#[derive(Properties, PartialEq)]
pub struct ParametersProps {
    pub month: AttrValue,
    pub year: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    pub on_month: Callback<String>,
    pub on_year: Callback<String>,
}

fn select_value(callback: &Callback<String>) -> Callback<Event> {
    callback.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value()
    })
}

/// Payroll period pickers
#[function_component(Parameters)]
pub fn parameters(props: &ParametersProps) -> Html {
    let years = use_memo((), |_| year_options(Local::now().year()));

    html! {
        <div class="parameters">
            <div class="form-group">
                <label for="month">{"Month"}</label>
                <select
                    id="month"
                    class="input"
                    disabled={props.disabled}
                    onchange={select_value(&props.on_month)}
                >
                    <option value="" selected={props.month.is_empty()} disabled=true>{"Select month"}</option>
                    { for MONTHS.iter().map(|(value, label)| html! {
                        <option key={*value} value={*value} selected={props.month.as_str() == *value}>{ *label }</option>
                    }) }
                </select>
            </div>
            <div class="form-group">
                <label for="year">{"Year"}</label>
                <select
                    id="year"
                    class="input"
                    disabled={props.disabled}
                    onchange={select_value(&props.on_year)}
                >
                    <option value="" selected={props.year.is_empty()} disabled=true>{"Select year"}</option>
                    { for years.iter().map(|year| html! {
                        <option key={year.clone()} value={year.clone()} selected={props.year.as_str() == year.as_str()}>
                            { year.clone() }
                        </option>
                    }) }
                </select>
            </div>
            <div class="form-group">
                <label for="department">{"Department"}</label>
                <select id="department" class="input" disabled=true>
                    <option value="all" selected=true>{"All Departments"}</option>
                </select>
            </div>
        </div>
    }
}
