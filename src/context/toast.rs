// ============================================================================
// TOASTS - transient notifications, auto-dismissed
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::utils::TOAST_DURATION_MS;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
}

impl Toast {
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            id: 0,
            kind,
            title: title.into(),
            message: None,
        }
    }
}

/// Handle for raising toasts. Outside `ToastProvider` toasts only reach the log.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub push: Callback<Toast>,
    pub dismiss: Callback<u32>,
}

impl ToastContext {
    pub fn notify(&self, toast: Toast) {
        self.push.emit(toast);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_mut_ref(Vec::<Toast>::new);
    let next_id = use_mut_ref(|| 1u32);
    let update = use_force_update();

    let dismiss = {
        let toasts = toasts.clone();
        let update = update.clone();
        Callback::from(move |id: u32| {
            toasts.borrow_mut().retain(|t| t.id != id);
            update.force_update();
        })
    };

    let push = {
        let toasts = toasts.clone();
        let dismiss = dismiss.clone();
        Callback::from(move |mut toast: Toast| {
            let id = *next_id.borrow();
            *next_id.borrow_mut() = id.wrapping_add(1);
            toast.id = id;
            toasts.borrow_mut().push(toast);
            update.force_update();

            let dismiss = dismiss.clone();
            Timeout::new(TOAST_DURATION_MS, move || dismiss.emit(id)).forget();
        })
    };

    let context = ToastContext {
        toasts: toasts.borrow().clone(),
        push,
        dismiss,
    };

    html! {
        <ContextProvider<ToastContext> context={context.clone()}>
            {props.children.clone()}
            <ToastViewport toasts={context.toasts.clone()} dismiss={context.dismiss.clone()} />
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewportProps {
    toasts: Vec<Toast>,
    dismiss: Callback<u32>,
}

#[function_component(ToastViewport)]
fn toast_viewport(props: &ToastViewportProps) -> Html {
    html! {
        <div class="toast-viewport" aria-live="polite">
            { for props.toasts.iter().map(|toast| {
                let id = toast.id;
                let onclick = props.dismiss.reform(move |_: MouseEvent| id);
                html! {
                    <div key={id} class={toast.kind.class()} role="status">
                        <div class="toast-body">
                            <div class="toast-title">{ toast.title.clone() }</div>
                            if let Some(message) = &toast.message {
                                <div class="toast-message">{ message.clone() }</div>
                            }
                        </div>
                        <button class="toast-close" aria-label="Dismiss" {onclick}>{"×"}</button>
                    </div>
                }
            }) }
        </div>
    }
}

#[hook]
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(|| {
        ToastContext {
            toasts: Vec::new(),
            push: Callback::from(|toast: Toast| log::info!("🔔 {}", toast.title)),
            dismiss: Callback::noop(),
        }
    })
}
