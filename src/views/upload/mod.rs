pub mod data_preview;
pub mod data_summary;
pub mod file_list;
pub mod file_upload_area;
pub mod guidelines;
pub mod parameters;
pub mod upload_page;
pub mod upload_status;

pub use data_preview::DataPreview;
pub use data_summary::DataSummary;
pub use file_list::FileList;
pub use file_upload_area::FileUploadArea;
pub use guidelines::Guidelines;
pub use parameters::Parameters;
pub use upload_page::UploadPage;
pub use upload_status::UploadStatusPanel;
