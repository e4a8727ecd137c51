use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Initials for the avatar bubble
    pub fn initials(&self) -> String {
        let source = if self.username.is_empty() { &self.email } else { &self.username };
        source
            .split(|c: char| c.is_whitespace() || matches!(c, '.' | '_' | '-' | '@'))
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

/// Authenticated session persisted in local storage
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub access_token: String,
    pub user: User,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Login and register responses. The token may arrive as
/// `data.access_token`, `data.token` or a top-level `access_token`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct AuthResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<AuthPayload>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct AuthPayload {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl AuthResponse {
    pub fn token(&self) -> Option<String> {
        let nested = self
            .data
            .as_ref()
            .and_then(|d| d.access_token.clone().or_else(|| d.token.clone()));
        nested
            .or_else(|| self.access_token.clone())
            .or_else(|| self.token.clone())
            .filter(|t| !t.is_empty())
    }

    pub fn user(&self) -> Option<User> {
        self.data
            .as_ref()
            .and_then(|d| d.user.clone())
            .or_else(|| self.user.clone())
    }

    /// Session to persist, if the server handed out a token
    pub fn session(&self) -> Option<Session> {
        let access_token = self.token()?;
        Some(Session {
            access_token,
            user: self.user().unwrap_or_default(),
        })
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ProfileResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}
