use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Text, email or password input with label and inline error.
/// Password inputs get a show/hide toggle.
#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let revealed = use_state(|| false);
    let is_password = props.input_type == "password";

    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let toggle = {
        let revealed = revealed.clone();
        Callback::from(move |_: MouseEvent| revealed.set(!*revealed))
    };

    let input_type = if is_password && *revealed {
        AttrValue::from("text")
    } else {
        props.input_type.clone()
    };
    let error_id = format!("{}-error", props.id);

    html! {
        <div class={classes!("form-group", props.error.is_some().then_some("has-error"))}>
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <div class="input-wrapper">
                <input
                    id={props.id.clone()}
                    name={props.id.clone()}
                    type={input_type}
                    class="input"
                    placeholder={props.placeholder.clone()}
                    value={props.value.clone()}
                    autocomplete={props.autocomplete.clone()}
                    aria-invalid={props.error.is_some().to_string()}
                    aria-describedby={props.error.as_ref().map(|_| error_id.clone())}
                    disabled={props.disabled}
                    {oninput}
                />
                if is_password {
                    <button
                        type="button"
                        class="input-toggle"
                        aria-label={if *revealed { "Hide password" } else { "Show password" }}
                        onclick={toggle}
                    >
                        { if *revealed { "🙈" } else { "👁️" } }
                    </button>
                }
            </div>
            if let Some(error) = &props.error {
                <p id={error_id} class="field-error">{ error.clone() }</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    #[prop_or(AttrValue::from("Error"))]
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or_default]
    pub success: bool,
}

#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let class = if props.success { "alert alert-success" } else { "alert alert-destructive" };
    html! {
        <div {class} role="alert">
            <span class="alert-icon">{ if props.success { "✓" } else { "!" } }</span>
            <div>
                <div class="alert-title">{ props.title.clone() }</div>
                <div class="alert-description">{ props.message.clone() }</div>
            </div>
        </div>
    }
}
