pub mod auth_viewmodel;
pub mod batch_viewmodel;
pub mod upload_viewmodel;
pub mod validation;

pub use auth_viewmodel::{AuthFailure, AuthViewModel, SignUpOutcome};
pub use batch_viewmodel::BatchViewModel;
pub use upload_viewmodel::UploadViewModel;
pub use validation::FieldErrors;
