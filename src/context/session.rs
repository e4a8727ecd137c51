// ============================================================================
// SESSION CONTEXT - who is logged in, shared API client
// ============================================================================
// One `SessionService` and one `ApiClient` for the whole app. Pages read the
// session from here instead of touching storage.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::{Session, User};
use crate::services::{ApiClient, PortalApi, SessionService};

#[derive(Clone)]
pub struct SessionContext {
    pub session: Option<Session>,
    pub service: SessionService,
    pub api: Rc<dyn PortalApi>,
    /// Stores a fresh session after login / sign-up
    pub sign_in: Callback<Session>,
    pub sign_out: Callback<()>,
    /// Replaces the user after a profile fetch
    pub update_user: Callback<User>,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session
            && self.service == other.service
            && Rc::ptr_eq(&self.api, &other.api)
    }
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// Read-only context straight from browser storage, used when a
    /// component renders outside `SessionProvider`
    fn detached() -> Self {
        let service = SessionService::browser();
        Self {
            session: service.load(),
            api: Rc::new(ApiClient::new(service.clone())),
            service,
            sign_in: Callback::noop(),
            sign_out: Callback::noop(),
            update_user: Callback::noop(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let service = (*use_memo((), |_| SessionService::browser())).clone();
    let api = {
        let service = service.clone();
        use_memo((), move |_| ApiClient::new(service))
    };
    let session = {
        let service = service.clone();
        use_state(move || service.load())
    };

    let sign_in = {
        let service = service.clone();
        let session = session.clone();
        Callback::from(move |new_session: Session| {
            if let Err(e) = service.save(&new_session) {
                log::error!("❌ Could not persist session: {}", e);
            }
            session.set(Some(new_session));
        })
    };

    let sign_out = {
        let service = service.clone();
        let session = session.clone();
        Callback::from(move |_| {
            service.clear();
            session.set(None);
            log::info!("👋 Session cleared");
        })
    };

    let update_user = {
        let service = service.clone();
        let session = session.clone();
        Callback::from(move |user: User| {
            if let Some(mut current) = (*session).clone() {
                if let Err(e) = service.update_user(&user) {
                    log::warn!("⚠️ {}", e);
                }
                current.user = user;
                session.set(Some(current));
            }
        })
    };

    let context = SessionContext {
        session: (*session).clone(),
        service,
        api: api as Rc<dyn PortalApi>,
        sign_in,
        sign_out,
        update_user,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        log::warn!("⚠️ SessionProvider missing, falling back to storage");
        SessionContext::detached()
    })
}
