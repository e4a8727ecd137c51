// ============================================================================
// SERVICES - HTTP and storage access only
// ============================================================================

pub mod api_client;
pub mod error;
pub mod session_service;

pub use api_client::{ApiClient, PortalApi};
pub use error::ApiError;
pub use session_service::SessionService;
