pub mod api;
pub mod auth;
pub mod batch;
pub mod dashboard;
pub mod salary;

pub use api::{ApiMessage, ProcessingStatus, RetryResponse};
pub use auth::{AuthResponse, ChangePasswordRequest, LoginRequest, ProfileResponse, RegisterRequest, Session, User};
pub use batch::{BatchListResponse, BatchStatus, UploadBatch};
pub use dashboard::{DashboardResponse, DashboardStats};
pub use salary::{SalaryRecord, SelectedFile, UploadDetails, UploadResponse};
