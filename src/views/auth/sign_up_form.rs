use yew::prelude::*;

use crate::hooks::FormState;
use crate::views::shared::{Alert, FormField};

#[derive(Properties, PartialEq)]
pub struct SignUpFormProps {
    pub state: FormState,
    pub on_submit: Callback<(String, String, String)>,
}

#[function_component(SignUpForm)]
pub fn sign_up_form(props: &SignUpFormProps) -> Html {
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);

    let onsubmit = {
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(((*username).clone(), (*email).clone(), (*password).clone()));
        })
    };

    let set = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |value: String| handle.set(value))
    };
    let errors = &props.state.field_errors;
    let busy = props.state.submitting;

    html! {
        <form class="auth-form" {onsubmit} novalidate=true>
            if let Some(message) = &props.state.server_error {
                <Alert message={message.clone()} />
            }
            <FormField
                id="username"
                label="Username"
                placeholder="jane.doe"
                autocomplete="username"
                value={(*username).clone()}
                on_change={set(&username)}
                error={errors.get("username").map(|e| AttrValue::from(e.to_string()))}
                disabled={busy}
            />
            <FormField
                id="signup-email"
                label="Email"
                input_type="email"
                placeholder="you@company.com"
                autocomplete="email"
                value={(*email).clone()}
                on_change={set(&email)}
                error={errors.get("email").map(|e| AttrValue::from(e.to_string()))}
                disabled={busy}
            />
            <FormField
                id="signup-password"
                label="Password"
                input_type="password"
                autocomplete="new-password"
                value={(*password).clone()}
                on_change={set(&password)}
                error={errors.get("password").map(|e| AttrValue::from(e.to_string()))}
                disabled={busy}
            />
            <p class="form-hint">
                {"At least 8 characters with upper and lower case letters, a number and one of @$!%*?&"}
            </p>
            <button type="submit" class="btn btn-primary btn-block" disabled={busy}>
                { if busy { "Creating account..." } else { "Create account" } }
            </button>
        </form>
    }
}
