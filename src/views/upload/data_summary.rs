use yew::prelude::*;

use crate::models::UploadDetails;
use crate::utils::format_currency;

#[derive(Properties, PartialEq)]
pub struct DataSummaryProps {
    pub details: UploadDetails,
}

#[function_component(DataSummary)]
pub fn data_summary(props: &DataSummaryProps) -> Html {
    let d = &props.details;
    let figures = [
        ("Total Employees", d.employee_count().to_string()),
        ("Total Basic Salary", format_currency(d.total_basic_salary)),
        ("Total Allowances", format_currency(d.total_allowances)),
        ("Total Deductions", format_currency(d.total_deductions())),
        ("Total Net Salary", format_currency(d.total_net_salary)),
    ];

    html! {
        <div class="card data-summary">
            <div class="card-header">
                <h2 class="card-title">{"Data Summary"}</h2>
            </div>
            <div class="card-content summary-grid">
                { for figures.into_iter().map(|(label, value)| html! {
                    <div class="summary-item" key={label}>
                        <div class="summary-label">{ label }</div>
                        <div class="summary-value">{ value }</div>
                    </div>
                }) }
            </div>
        </div>
    }
}
