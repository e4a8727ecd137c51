use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or(AttrValue::from("Confirm"))]
    pub confirm_label: AttrValue,
    #[prop_or_default]
    pub destructive: bool,
    #[prop_or_default]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Modal yes/no prompt. Nothing is rendered while closed.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());
    let confirm_class = if props.destructive { "btn btn-destructive" } else { "btn btn-primary" };

    html! {
        <div class="dialog-backdrop">
            <div class="dialog" role="alertdialog" aria-modal="true">
                <h2 class="dialog-title">{ props.title.clone() }</h2>
                <p class="dialog-message">{ props.message.clone() }</p>
                <div class="dialog-actions">
                    <button class="btn btn-outline" onclick={on_cancel} disabled={props.busy}>{"Cancel"}</button>
                    <button class={confirm_class} onclick={on_confirm} disabled={props.busy}>
                        if props.busy { {"Working..."} } else { { props.confirm_label.clone() } }
                    </button>
                </div>
            </div>
        </div>
    }
}
