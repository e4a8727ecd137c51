use yew::prelude::*;

use crate::hooks::use_change_password;
use crate::views::shared::{Alert, FormField};

#[derive(Properties, PartialEq)]
pub struct ChangePasswordFormProps {
    pub on_close: Callback<()>,
}

#[function_component(ChangePasswordForm)]
pub fn change_password_form(props: &ChangePasswordFormProps) -> Html {
    let current = use_state(String::new);
    let new_password = use_state(String::new);
    let confirm = use_state(String::new);
    let form = use_change_password(props.on_close.clone());

    let onsubmit = {
        let current = current.clone();
        let new_password = new_password.clone();
        let confirm = confirm.clone();
        let submit = form.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(((*current).clone(), (*new_password).clone(), (*confirm).clone()));
        })
    };

    let on_cancel = {
        let reset = form.reset.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            reset.emit(());
            on_close.emit(());
        })
    };

    let set = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |value: String| handle.set(value))
    };
    let errors = &form.state.field_errors;
    let busy = form.state.submitting;

    html! {
        <form class="stack" {onsubmit} novalidate=true>
            if let Some(message) = &form.state.server_error {
                <Alert message={message.clone()} />
            }
            <FormField
                id="current_password"
                label="Current Password"
                input_type="password"
                autocomplete="current-password"
                value={(*current).clone()}
                on_change={set(&current)}
                error={errors.get("current_password").map(|e| AttrValue::from(e.to_string()))}
                disabled={busy}
            />
            <FormField
                id="new_password"
                label="New Password"
                input_type="password"
                autocomplete="new-password"
                value={(*new_password).clone()}
                on_change={set(&new_password)}
                error={errors.get("new_password").map(|e| AttrValue::from(e.to_string()))}
                disabled={busy}
            />
            <FormField
                id="confirm_password"
                label="Confirm New Password"
                input_type="password"
                autocomplete="new-password"
                value={(*confirm).clone()}
                on_change={set(&confirm)}
                error={errors.get("confirm_password").map(|e| AttrValue::from(e.to_string()))}
                disabled={busy}
            />
            <div class="dialog-actions">
                <button type="button" class="btn btn-outline" onclick={on_cancel} disabled={busy}>{"Cancel"}</button>
                <button type="submit" class="btn btn-primary" disabled={busy}>
                    { if busy { "Updating..." } else { "Update Password" } }
                </button>
            </div>
        </form>
    }
}
