// ============================================================================
// AUTH VIEWMODEL - login, sign-up, profile, change password
// ============================================================================
// Returns values; the hooks decide what to render and where to navigate.
// ============================================================================

use std::fmt;
use std::rc::Rc;

use super::validation::{validate_change_password, validate_login, validate_sign_up, FieldErrors};
use crate::models::{Session, User};
use crate::services::{ApiError, PortalApi, SessionService};

#[derive(Debug, Clone, PartialEq)]
pub enum AuthFailure {
    /// Form rejected before any request was made
    Invalid(FieldErrors),
    Api(ApiError),
}

impl AuthFailure {
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            AuthFailure::Invalid(errors) => errors.clone(),
            AuthFailure::Api(_) => FieldErrors::default(),
        }
    }

    /// Server message for the inline alert; `None` for field errors
    pub fn server_message(&self) -> Option<String> {
        match self {
            AuthFailure::Invalid(_) => None,
            AuthFailure::Api(e) => Some(e.user_message()),
        }
    }
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthFailure::Invalid(errors) => write!(f, "{} invalid field(s)", errors.len()),
            AuthFailure::Api(e) => write!(f, "{}", e),
        }
    }
}

impl From<ApiError> for AuthFailure {
    fn from(e: ApiError) -> Self {
        AuthFailure::Api(e)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SignUpOutcome {
    /// Server issued a token: the user is logged in
    SignedIn(Session),
    /// Account created without a token: the user must log in
    Registered(String),
}

pub struct AuthViewModel {
    api: Rc<dyn PortalApi>,
    session: SessionService,
}

impl AuthViewModel {
    pub fn new(api: Rc<dyn PortalApi>, session: SessionService) -> Self {
        Self { api, session }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthFailure> {
        let request = validate_login(email, password).map_err(AuthFailure::Invalid)?;

        let response = self.api.login(&request).await?;
        let session = response.session().ok_or_else(|| {
            ApiError::Rejected(
                response
                    .message
                    .clone()
                    .unwrap_or_else(|| "Login response did not include a token".to_string()),
            )
        })?;

        self.persist(&session)?;
        log::info!("✅ Logged in as {}", request.email);
        Ok(session)
    }

    pub async fn sign_up(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<SignUpOutcome, AuthFailure> {
        let request = validate_sign_up(username, email, password).map_err(AuthFailure::Invalid)?;

        let response = self.api.register(&request).await?;
        match response.session() {
            Some(session) => {
                self.persist(&session)?;
                log::info!("✅ Registered and logged in as {}", request.email);
                Ok(SignUpOutcome::SignedIn(session))
            }
            None => {
                log::info!("✅ Registered {}, login required", request.email);
                Ok(SignUpOutcome::Registered(
                    response
                        .message
                        .unwrap_or_else(|| "Account created. Please log in.".to_string()),
                ))
            }
        }
    }

    /// Fetches the profile and refreshes the stored user
    pub async fn profile(&self) -> Result<User, ApiError> {
        let response = self.api.profile().await?;
        let user = response
            .user
            .ok_or_else(|| ApiError::Parse("Profile response without user".to_string()))?;
        if let Err(e) = self.session.update_user(&user) {
            log::warn!("⚠️ {}", e);
        }
        Ok(user)
    }

    pub async fn change_password(
        &self,
        current: &str,
        new_password: &str,
        confirm: &str,
    ) -> Result<String, AuthFailure> {
        let request =
            validate_change_password(current, new_password, confirm).map_err(AuthFailure::Invalid)?;
        let response = self.api.change_password(&request).await?;
        log::info!("🔑 Password changed");
        Ok(response
            .message
            .unwrap_or_else(|| "Password changed successfully".to_string()))
    }

    fn persist(&self, session: &Session) -> Result<(), ApiError> {
        self.session.save(session).map_err(ApiError::Request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{memory_session, server_error, MockApi};
    use futures::executor::block_on;
    use serde_json::json;

    fn vm(api: &Rc<MockApi>, session: &SessionService) -> AuthViewModel {
        AuthViewModel::new(api.clone(), session.clone())
    }

    #[test]
    fn login_stores_session() {
        let api = MockApi::new();
        api.respond(
            "login",
            Ok(json!({"status":"success","data":{"access_token":"jwt","user":{"username":"hr","email":"hr@acme.io","role":"HR Admin"}}})),
        );
        let session = memory_session();

        let result = block_on(vm(&api, &session).login(" HR@acme.io", "secret1")).unwrap();

        assert_eq!(result.access_token, "jwt");
        assert_eq!(session.load(), Some(result));
        assert_eq!(api.calls_to("login")[0].arg, "hr@acme.io");
    }

    #[test]
    fn invalid_login_makes_no_request() {
        let api = MockApi::new();
        let session = memory_session();

        let result = block_on(vm(&api, &session).login("nope", "123"));

        let errors = result.unwrap_err().field_errors();
        assert_eq!(errors.len(), 2);
        assert!(api.calls().is_empty());
        assert!(session.load().is_none());
    }

    #[test]
    fn server_rejection_is_shown_as_is() {
        let api = MockApi::new();
        api.respond("login", Err(server_error(401, "Invalid email or password")));
        let session = memory_session();

        let failure = block_on(vm(&api, &session).login("hr@acme.io", "secret1")).unwrap_err();

        assert_eq!(failure.server_message().as_deref(), Some("Invalid email or password"));
        assert!(session.load().is_none());
    }

    #[test]
    fn sign_up_without_token_requires_login() {
        let api = MockApi::new();
        api.respond("register", Ok(json!({"status":"success","message":"User registered successfully"})));
        let session = memory_session();

        let outcome = block_on(vm(&api, &session).sign_up("jane", "jane@acme.io", "Str0ng!pw")).unwrap();

        assert_eq!(outcome, SignUpOutcome::Registered("User registered successfully".to_string()));
        assert!(session.load().is_none());
    }

    #[test]
    fn sign_up_with_token_logs_in() {
        let api = MockApi::new();
        api.respond(
            "register",
            Ok(json!({"status":"success","data":{"token":"reg","user":{"username":"jane","email":"jane@acme.io"}}})),
        );
        let session = memory_session();

        let outcome = block_on(vm(&api, &session).sign_up("jane", "jane@acme.io", "Str0ng!pw")).unwrap();

        assert!(matches!(outcome, SignUpOutcome::SignedIn(_)));
        assert_eq!(session.token().as_deref(), Some("reg"));
    }

    #[test]
    fn mismatched_confirmation_is_not_sent() {
        let api = MockApi::new();
        let session = memory_session();

        let failure =
            block_on(vm(&api, &session).change_password("oldpass", "Str0ng!pw", "other")).unwrap_err();

        assert_eq!(failure.field_errors().get("confirm_password"), Some("Passwords don't match"));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn change_password_returns_server_message() {
        let api = MockApi::new();
        api.respond("change_password", Ok(json!({"status":"success","message":"Password updated"})));
        let session = memory_session();

        let message =
            block_on(vm(&api, &session).change_password("oldpass", "Str0ng!pw", "Str0ng!pw")).unwrap();

        assert_eq!(message, "Password updated");
    }

    #[test]
    fn profile_refreshes_stored_user() {
        let api = MockApi::new();
        api.respond(
            "profile",
            Ok(json!({"status":"success","user":{"username":"hr","email":"hr@acme.io","role":"HR Admin","created_at":"2025-01-02"}})),
        );
        let session = memory_session();
        session
            .save(&Session { access_token: "t".to_string(), user: User::default() })
            .unwrap();

        let user = block_on(vm(&api, &session).profile()).unwrap();

        assert_eq!(user.role, "HR Admin");
        assert_eq!(session.user(), Some(user));
    }
}
