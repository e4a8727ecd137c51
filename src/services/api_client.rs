// ============================================================================
// API CLIENT - HTTP only, no business logic
// ============================================================================
// Every call goes through `PortalApi` so ViewModels can be exercised with a
// mock. `ApiClient` is the gloo-net implementation used in the browser.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::FormData;

use super::error::ApiError;
use super::session_service::SessionService;
use crate::config::CONFIG;
use crate::models::{
    ApiMessage, AuthResponse, BatchListResponse, ChangePasswordRequest, DashboardResponse,
    LoginRequest, ProcessingStatus, ProfileResponse, RegisterRequest, RetryResponse,
    SelectedFile, UploadResponse,
};
use crate::utils::{
    API_BATCHES, API_CHANGE_PASSWORD, API_DASHBOARD, API_LOGIN, API_PROCESS_RETRY,
    API_PROCESS_STATUS, API_PROFILE, API_REGISTER, API_SALARY_DATA, API_SEND_SLIPS, API_UPLOAD,
};

/// Operations the portal performs against the REST backend
#[async_trait(?Send)]
pub trait PortalApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;
    async fn profile(&self) -> Result<ProfileResponse, ApiError>;
    async fn dashboard(&self) -> Result<DashboardResponse, ApiError>;
    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<ApiMessage, ApiError>;
    async fn list_batches(&self) -> Result<BatchListResponse, ApiError>;
    async fn upload_salary_file(
        &self,
        month: &str,
        year: &str,
        file: &SelectedFile,
    ) -> Result<UploadResponse, ApiError>;
    async fn send_slips(&self, batch_id: &str) -> Result<ApiMessage, ApiError>;
    async fn delete_batch(&self, batch_id: &str) -> Result<ApiMessage, ApiError>;
    async fn batch_status(&self, batch_id: &str) -> Result<ProcessingStatus, ApiError>;
    async fn retry_failed(&self, batch_id: &str) -> Result<RetryResponse, ApiError>;
}

/// Joins the base URL and a relative API path with exactly one slash
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Decodes a 2xx body. A body with `"status": "error"` is a rejection even
/// though the HTTP call itself succeeded.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: serde_json::Value = if body.trim().is_empty() {
        serde_json::Value::Object(Default::default())
    } else {
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?
    };

    let status = value.get("status").and_then(|s| s.as_str()).unwrap_or_default();
    if status.eq_ignore_ascii_case("error") {
        let message = value
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or_default()
            .to_string();
        return Err(ApiError::Rejected(message));
    }

    serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
}

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    session: SessionService,
}

impl ApiClient {
    pub fn new(session: SessionService) -> Self {
        Self {
            base_url: CONFIG.api_base_url(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }

    /// Adds the bearer token when a session exists
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !(200..300).contains(&status) {
            return Err(ApiError::from_response(status, &response.status_text(), &body));
        }
        decode_body(&body)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.authorized(Request::get(&self.url(path))).send().await?;
        Self::read(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .authorized(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await?;
        Self::read(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.authorized(Request::post(&self.url(path))).send().await?;
        Self::read(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.authorized(Request::delete(&self.url(path))).send().await?;
        Self::read(response).await
    }
}

#[async_trait(?Send)]
impl PortalApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        log::info!("🔐 Login for {}", request.email);
        self.post_json(API_LOGIN, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        log::info!("📝 Registering {}", request.email);
        self.post_json(API_REGISTER, request).await
    }

    async fn profile(&self) -> Result<ProfileResponse, ApiError> {
        self.get(API_PROFILE).await
    }

    async fn dashboard(&self) -> Result<DashboardResponse, ApiError> {
        self.get(API_DASHBOARD).await
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<ApiMessage, ApiError> {
        self.post_json(API_CHANGE_PASSWORD, request).await
    }

    async fn list_batches(&self) -> Result<BatchListResponse, ApiError> {
        self.get(API_BATCHES).await
    }

    async fn upload_salary_file(
        &self,
        month: &str,
        year: &str,
        file: &SelectedFile,
    ) -> Result<UploadResponse, ApiError> {
        let handle = file
            .handle
            .as_ref()
            .ok_or_else(|| ApiError::Request(format!("No browser file behind '{}'", file.name)))?;

        let form = FormData::new().map_err(|_| ApiError::Request("FormData unavailable".to_string()))?;
        form.append_with_str("month", month)
            .and_then(|_| form.append_with_str("year", year))
            .and_then(|_| form.append_with_blob_and_filename("file", handle, &file.name))
            .map_err(|_| ApiError::Request("Could not build upload form".to_string()))?;

        log::info!("📤 Uploading {} ({} bytes) for {}/{}", file.name, file.size, month, year);

        // No explicit Content-Type: the browser sets the multipart boundary
        let response = self
            .authorized(Request::post(&self.url(API_UPLOAD)))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await?;
        Self::read(response).await
    }

    async fn send_slips(&self, batch_id: &str) -> Result<ApiMessage, ApiError> {
        log::info!("✉️ Generating and sending slips for batch {}", batch_id);
        self.post_empty(&format!("{}/{}", API_SEND_SLIPS, batch_id)).await
    }

    async fn delete_batch(&self, batch_id: &str) -> Result<ApiMessage, ApiError> {
        log::info!("🗑️ Deleting batch {}", batch_id);
        self.delete(&format!("{}/{}", API_SALARY_DATA, batch_id)).await
    }

    async fn batch_status(&self, batch_id: &str) -> Result<ProcessingStatus, ApiError> {
        self.get(&format!("{}/{}", API_PROCESS_STATUS, batch_id)).await
    }

    async fn retry_failed(&self, batch_id: &str) -> Result<RetryResponse, ApiError> {
        log::info!("🔁 Retrying failed slips for batch {}", batch_id);
        self.post_empty(&format!("{}/{}", API_PROCESS_RETRY, batch_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UploadBatch;

    #[test]
    fn endpoint_joining() {
        assert_eq!(
            endpoint_url("http://127.0.0.1:5000/api/", "salary/batches"),
            "http://127.0.0.1:5000/api/salary/batches"
        );
        assert_eq!(
            endpoint_url("https://hr.example.com/api", "/auth/login"),
            "https://hr.example.com/api/auth/login"
        );
    }

    #[test]
    fn error_status_in_body_is_rejection() {
        let result: Result<ApiMessage, _> =
            decode_body(r#"{"status":"error","message":"No salary data found for this batch"}"#);
        assert_eq!(
            result,
            Err(ApiError::Rejected("No salary data found for this batch".to_string()))
        );
    }

    #[test]
    fn success_body_decodes() {
        let list: BatchListResponse = decode_body(
            r#"{"status":"success","data":[{"batch_id":"b1","month":"03","year":"2025","status":"pending"}]}"#,
        )
        .unwrap();
        assert_eq!(
            list.data,
            vec![UploadBatch {
                batch_id: "b1".to_string(),
                month: "03".to_string(),
                year: "2025".to_string(),
                ..UploadBatch::default()
            }]
        );
    }

    #[test]
    fn empty_body_is_default() {
        let msg: ApiMessage = decode_body("").unwrap();
        assert!(msg.status.is_empty());
        assert!(msg.message.is_none());
    }

    #[test]
    fn garbage_is_parse_error() {
        let result: Result<ApiMessage, _> = decode_body("<html>");
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }
}
