// ============================================================================
// USE AUTH - login / sign-up tabs, profile, change password
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use super::use_store::use_store;
use crate::app::Route;
use crate::context::{use_session, use_toast, Toast};
use crate::models::User;
use crate::viewmodels::{AuthFailure, AuthViewModel, FieldErrors, SignUpOutcome};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AuthTab {
    #[default]
    Login,
    SignUp,
}

/// Submission state shared by the auth forms
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FormState {
    pub submitting: bool,
    pub field_errors: FieldErrors,
    pub server_error: Option<String>,
}

impl FormState {
    fn begin(&mut self) {
        self.submitting = true;
        self.field_errors = FieldErrors::default();
        self.server_error = None;
    }

    fn fail(&mut self, failure: &AuthFailure) {
        self.submitting = false;
        self.field_errors = failure.field_errors();
        self.server_error = failure.server_message();
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct AuthState {
    pub tab: AuthTab,
    pub login: FormState,
    pub sign_up: FormState,
}

#[derive(Clone)]
pub struct UseAuthHandle {
    pub state: AuthState,
    pub select_tab: Callback<AuthTab>,
    pub login: Callback<(String, String)>,
    pub sign_up: Callback<(String, String, String)>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let store = use_store(AuthState::default);
    let session = use_session();
    let toast = use_toast();
    let navigator = use_navigator();

    let select_tab = {
        let store = store.clone();
        Callback::from(move |tab: AuthTab| store.update(|s| s.tab = tab))
    };

    let login = {
        let store = store.clone();
        let session = session.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();
        Callback::from(move |(email, password): (String, String)| {
            if store.get().login.submitting {
                return;
            }
            store.update(|s| s.login.begin());

            let store = store.clone();
            let session = session.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = AuthViewModel::new(session.api.clone(), session.service.clone());
                match vm.login(&email, &password).await {
                    Ok(new_session) => {
                        store.update(|s| s.login = FormState::default());
                        session.sign_in.emit(new_session);
                        toast.notify(Toast::success("Welcome back!"));
                        if let Some(nav) = navigator {
                            nav.push(&Route::Home);
                        }
                    }
                    Err(failure) => {
                        log::error!("❌ Login failed: {}", failure);
                        if let Some(message) = failure.server_message() {
                            toast.notify(Toast::error("Login failed").with_message(message));
                        }
                        store.update(|s| s.login.fail(&failure));
                    }
                }
            });
        })
    };

    let sign_up = {
        let store = store.clone();
        Callback::from(move |(username, email, password): (String, String, String)| {
            if store.get().sign_up.submitting {
                return;
            }
            store.update(|s| s.sign_up.begin());

            let store = store.clone();
            let session = session.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = AuthViewModel::new(session.api.clone(), session.service.clone());
                match vm.sign_up(&username, &email, &password).await {
                    Ok(SignUpOutcome::SignedIn(new_session)) => {
                        store.update(|s| s.sign_up = FormState::default());
                        session.sign_in.emit(new_session);
                        toast.notify(Toast::success("Account created"));
                        if let Some(nav) = navigator {
                            nav.push(&Route::Home);
                        }
                    }
                    Ok(SignUpOutcome::Registered(message)) => {
                        store.update(|s| {
                            s.sign_up = FormState::default();
                            s.tab = AuthTab::Login;
                        });
                        toast.notify(Toast::success("Account created").with_message(message));
                    }
                    Err(failure) => {
                        log::error!("❌ Sign-up failed: {}", failure);
                        if let Some(message) = failure.server_message() {
                            toast.notify(Toast::error("Sign-up failed").with_message(message));
                        }
                        store.update(|s| s.sign_up.fail(&failure));
                    }
                }
            });
        })
    };

    UseAuthHandle {
        state: store.snapshot(),
        select_tab,
        login,
        sign_up,
    }
}

#[derive(Clone)]
pub struct UseChangePasswordHandle {
    pub state: FormState,
    pub submit: Callback<(String, String, String)>,
    pub reset: Callback<()>,
}

/// `on_done` fires after the server accepted the new password
#[hook]
pub fn use_change_password(on_done: Callback<()>) -> UseChangePasswordHandle {
    let store = use_store(FormState::default);
    let session = use_session();
    let toast = use_toast();

    let submit = {
        let store = store.clone();
        Callback::from(move |(current, new_password, confirm): (String, String, String)| {
            if store.get().submitting {
                return;
            }
            store.update(|s| s.begin());

            let store = store.clone();
            let session = session.clone();
            let toast = toast.clone();
            let on_done = on_done.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = AuthViewModel::new(session.api.clone(), session.service.clone());
                match vm.change_password(&current, &new_password, &confirm).await {
                    Ok(message) => {
                        store.update(|s| *s = FormState::default());
                        toast.notify(Toast::success("Password changed").with_message(message));
                        on_done.emit(());
                    }
                    Err(failure) => {
                        if let Some(message) = failure.server_message() {
                            toast.notify(Toast::error("Could not change password").with_message(message));
                        }
                        store.update(|s| s.fail(&failure));
                    }
                }
            });
        })
    };

    let reset = {
        let store = store.clone();
        Callback::from(move |_| store.update(|s| *s = FormState::default()))
    };

    UseChangePasswordHandle {
        state: store.snapshot(),
        submit,
        reset,
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ProfileState {
    pub loading: bool,
    pub user: Option<User>,
    pub error: Option<String>,
}

/// Profile page data: the stored user right away, then the server's copy
#[hook]
pub fn use_profile() -> ProfileState {
    let session = use_session();
    let store = {
        let cached = session.user().cloned();
        use_store(move || ProfileState {
            loading: true,
            user: cached,
            error: None,
        })
    };

    {
        let store = store.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let vm = AuthViewModel::new(session.api.clone(), session.service.clone());
                match vm.profile().await {
                    Ok(user) => {
                        session.update_user.emit(user.clone());
                        store.update(|s| {
                            s.loading = false;
                            s.user = Some(user);
                        });
                    }
                    Err(e) => {
                        log::error!("❌ Profile fetch failed: {}", e);
                        if e.is_unauthorized() {
                            session.sign_out.emit(());
                        }
                        store.update(|s| {
                            s.loading = false;
                            s.error = Some(e.user_message());
                        });
                    }
                }
            });
            || ()
        });
    }

    store.snapshot()
}
