use std::fmt;

use crate::utils::GENERIC_ERROR_MESSAGE;

/// Failure of a call to the portal API
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport-level failure: offline, DNS, CORS
    Network(String),
    /// Non-2xx answer; `message` is the server's message when it sent one
    Server { status: u16, message: String },
    /// 2xx answer carrying `"status": "error"`
    Rejected(String),
    /// Body could not be decoded
    Parse(String),
    /// Request could not be built (serialization, missing file handle)
    Request(String),
}

impl ApiError {
    /// Text shown to the user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } | ApiError::Rejected(message) if !message.is_empty() => {
                message.clone()
            }
            ApiError::Network(_) => "Unable to reach the server. Check your connection and try again.".to_string(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Server { status: 401, .. })
    }

    /// Builds a `Server` error from a non-2xx body, preferring its `message` field
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("msg"))
                    .or_else(|| v.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| status_text.to_string());
        ApiError::Server { status, message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Network error: {}", e),
            ApiError::Server { status, message } => write!(f, "HTTP {}: {}", status, message),
            ApiError::Rejected(message) => write!(f, "Rejected: {}", message),
            ApiError::Parse(e) => write!(f, "Parse error: {}", e),
            ApiError::Request(e) => write!(f, "Request build error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_preferred() {
        let err = ApiError::from_response(401, "UNAUTHORIZED", r#"{"status":"error","message":"Invalid email or password"}"#);
        assert_eq!(
            err,
            ApiError::Server { status: 401, message: "Invalid email or password".to_string() }
        );
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message(), "Invalid email or password");
    }

    #[test]
    fn jwt_msg_field_is_understood() {
        let err = ApiError::from_response(422, "Unprocessable", r#"{"msg":"Signature verification failed"}"#);
        assert_eq!(err.user_message(), "Signature verification failed");
    }

    #[test]
    fn falls_back_to_status_text() {
        let err = ApiError::from_response(502, "Bad Gateway", "<html>oops</html>");
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
        assert_eq!(err.user_message(), "Bad Gateway");
    }

    #[test]
    fn generic_fallback() {
        assert_eq!(ApiError::Parse("eof".to_string()).user_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(
            ApiError::Server { status: 500, message: String::new() }.user_message(),
            GENERIC_ERROR_MESSAGE
        );
    }
}
