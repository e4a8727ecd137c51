pub mod use_auth;
pub mod use_batches;
pub mod use_store;
pub mod use_upload;

pub use use_auth::{use_auth, use_change_password, use_profile, AuthTab, FormState};
pub use use_batches::use_batches;
pub use use_upload::use_upload;
