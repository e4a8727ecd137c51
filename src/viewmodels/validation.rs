// ============================================================================
// FORM VALIDATION - login, sign-up, change password
// ============================================================================

use std::collections::BTreeMap;

use crate::models::{ChangePasswordRequest, LoginRequest, RegisterRequest};

pub const PASSWORD_SPECIALS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

/// Inline error per form field, keyed by field name
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first error reported for a field
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn merge(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.add(field, message);
        }
    }

    fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Minimal `local@domain.tld` check: one `@`, no whitespace, a dot in the
/// domain with text on both sides
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !host.starts_with('.') && tld.len() >= 2,
        None => false,
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn check_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    if !is_valid_email(email) {
        return Err("Invalid email address".to_string());
    }
    Ok(())
}

fn check_no_spaces(password: &str) -> Result<(), String> {
    if password.contains(' ') {
        return Err("Password cannot contain spaces".to_string());
    }
    Ok(())
}

/// Sign-up / new-password rule: 8+ chars with upper, lower, digit and one of `@$!%*?&`
pub fn check_strong_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIALS.contains(&c));
    if !(has_lower && has_upper && has_digit && has_special) {
        return Err(
            "Password must contain at least one uppercase letter, one lowercase letter, one number and one special character"
                .to_string(),
        );
    }
    check_no_spaces(password)
}

pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, FieldErrors> {
    let email = normalize_email(email);
    let mut errors = FieldErrors::new();

    errors.merge("email", check_email(&email));
    errors.merge(
        "password",
        if password.is_empty() {
            Err("Password is required".to_string())
        } else if password.chars().count() < 6 {
            Err("Password must be at least 6 characters".to_string())
        } else {
            check_no_spaces(password)
        },
    );

    errors.into_result(LoginRequest {
        email,
        password: password.to_string(),
    })
}

pub fn validate_sign_up(
    username: &str,
    email: &str,
    password: &str,
) -> Result<RegisterRequest, FieldErrors> {
    let username = username.trim().to_string();
    let email = normalize_email(email);
    let mut errors = FieldErrors::new();

    if username.is_empty() {
        errors.add("username", "Username is required");
    } else if username.chars().count() < 3 {
        errors.add("username", "Username must be at least 3 characters");
    }
    errors.merge("email", check_email(&email));
    errors.merge("password", check_strong_password(password));

    errors.into_result(RegisterRequest {
        username,
        email,
        password: password.to_string(),
    })
}

pub fn validate_change_password(
    current: &str,
    new_password: &str,
    confirm: &str,
) -> Result<ChangePasswordRequest, FieldErrors> {
    let mut errors = FieldErrors::new();

    if current.is_empty() {
        errors.add("current_password", "Current password is required");
    } else {
        errors.merge("current_password", check_no_spaces(current));
    }
    errors.merge("new_password", check_strong_password(new_password));
    if confirm.is_empty() {
        errors.add("confirm_password", "Confirm password is required");
    } else if confirm != new_password {
        errors.add("confirm_password", "Passwords don't match");
    }

    errors.into_result(ChangePasswordRequest {
        current_password: current.to_string(),
        new_password: new_password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails() {
        assert!(is_valid_email("hr@acme.io"));
        assert!(is_valid_email("first.last+tag@mail.acme.co.uk"));
        assert!(!is_valid_email("hr@acme"));
        assert!(!is_valid_email("@acme.io"));
        assert!(!is_valid_email("hr@@acme.io"));
        assert!(!is_valid_email("h r@acme.io"));
        assert!(!is_valid_email("hr@.io"));
    }

    #[test]
    fn login_normalizes_email() {
        let request = validate_login("  HR@Acme.IO ", "secret1").unwrap();
        assert_eq!(request.email, "hr@acme.io");
    }

    #[test]
    fn login_errors_per_field() {
        let errors = validate_login("", "abc").unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));

        let errors = validate_login("not-an-email", "has space").unwrap_err();
        assert_eq!(errors.get("email"), Some("Invalid email address"));
        assert_eq!(errors.get("password"), Some("Password cannot contain spaces"));

        let errors = validate_login("hr@acme.io", "").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn sign_up_password_rules() {
        assert!(validate_sign_up("jane", "jane@acme.io", "Str0ng!pw").is_ok());

        let weak = validate_sign_up("jane", "jane@acme.io", "alllower1!").unwrap_err();
        assert!(weak.get("password").unwrap().starts_with("Password must contain"));

        let short = validate_sign_up("jane", "jane@acme.io", "Aa1!").unwrap_err();
        assert_eq!(short.get("password"), Some("Password must be at least 8 characters"));

        let spaced = validate_sign_up("jane", "jane@acme.io", "Str0ng! pw").unwrap_err();
        assert_eq!(spaced.get("password"), Some("Password cannot contain spaces"));

        let other_special = validate_sign_up("jane", "jane@acme.io", "Str0ng#pw").unwrap_err();
        assert!(other_special.get("password").is_some());
    }

    #[test]
    fn sign_up_username_is_trimmed() {
        let errors = validate_sign_up("  ab  ", "jane@acme.io", "Str0ng!pw").unwrap_err();
        assert_eq!(errors.get("username"), Some("Username must be at least 3 characters"));

        let request = validate_sign_up("  jane ", "Jane@Acme.io", "Str0ng!pw").unwrap();
        assert_eq!(request.username, "jane");
        assert_eq!(request.email, "jane@acme.io");
    }

    #[test]
    fn change_password_confirmation() {
        let errors = validate_change_password("old pass", "Str0ng!pw", "Str0ng!px").unwrap_err();
        assert_eq!(errors.get("current_password"), Some("Password cannot contain spaces"));
        assert_eq!(errors.get("confirm_password"), Some("Passwords don't match"));

        let request = validate_change_password("oldpass", "Str0ng!pw", "Str0ng!pw").unwrap();
        assert_eq!(request.new_password, "Str0ng!pw");

        let errors = validate_change_password("", "", "").unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
