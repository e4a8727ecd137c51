// ============================================================================
// TEST SUPPORT - recording PortalApi double
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::models::{
    ApiMessage, AuthResponse, BatchListResponse, ChangePasswordRequest, DashboardResponse,
    LoginRequest, ProcessingStatus, ProfileResponse, RegisterRequest, RetryResponse,
    SelectedFile, UploadResponse,
};
use crate::services::session_service::MemorySessionStorage;
use crate::services::{ApiError, PortalApi, SessionService};

/// One recorded call: operation name plus its argument rendered as text
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub op: &'static str,
    pub arg: String,
}

/// Answers every operation with a canned JSON body (default
/// `{"status":"success"}`) and records what was asked.
#[derive(Default)]
pub struct MockApi {
    responses: RefCell<HashMap<&'static str, Result<Value, ApiError>>>,
    calls: RefCell<Vec<Call>>,
}

impl MockApi {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn respond(&self, op: &'static str, response: Result<Value, ApiError>) {
        self.responses.borrow_mut().insert(op, response);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn calls_to(&self, op: &str) -> Vec<Call> {
        self.calls.borrow().iter().filter(|c| c.op == op).cloned().collect()
    }

    fn answer<T: DeserializeOwned>(&self, op: &'static str, arg: String) -> Result<T, ApiError> {
        self.calls.borrow_mut().push(Call { op, arg });
        let response = self
            .responses
            .borrow()
            .get(op)
            .cloned()
            .unwrap_or_else(|| Ok(json!({"status": "success"})));
        let body = response?.to_string();
        crate::services::api_client::decode_body(&body)
    }
}

#[async_trait(?Send)]
impl PortalApi for MockApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.answer("login", request.email.clone())
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.answer("register", format!("{} {}", request.username, request.email))
    }

    async fn profile(&self) -> Result<ProfileResponse, ApiError> {
        self.answer("profile", String::new())
    }

    async fn dashboard(&self) -> Result<DashboardResponse, ApiError> {
        self.answer("dashboard", String::new())
    }

    async fn change_password(&self, _request: &ChangePasswordRequest) -> Result<ApiMessage, ApiError> {
        self.answer("change_password", String::new())
    }

    async fn list_batches(&self) -> Result<BatchListResponse, ApiError> {
        self.answer("list_batches", String::new())
    }

    async fn upload_salary_file(
        &self,
        month: &str,
        year: &str,
        file: &SelectedFile,
    ) -> Result<UploadResponse, ApiError> {
        self.answer("upload", format!("{} {} {}", month, year, file.name))
    }

    async fn send_slips(&self, batch_id: &str) -> Result<ApiMessage, ApiError> {
        self.answer("send_slips", batch_id.to_string())
    }

    async fn delete_batch(&self, batch_id: &str) -> Result<ApiMessage, ApiError> {
        self.answer("delete_batch", batch_id.to_string())
    }

    async fn batch_status(&self, batch_id: &str) -> Result<ProcessingStatus, ApiError> {
        self.answer("batch_status", batch_id.to_string())
    }

    async fn retry_failed(&self, batch_id: &str) -> Result<RetryResponse, ApiError> {
        self.answer("retry_failed", batch_id.to_string())
    }
}

/// Session service over an in-memory map
pub fn memory_session() -> SessionService {
    SessionService::new(Rc::new(MemorySessionStorage::default()))
}

pub fn server_error(status: u16, message: &str) -> ApiError {
    ApiError::Server { status, message: message.to_string() }
}
