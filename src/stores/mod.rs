pub mod batch_store;
pub mod upload_store;

pub use batch_store::BatchStore;
pub use upload_store::{UploadStatus, UploadStore, UploadTab};
