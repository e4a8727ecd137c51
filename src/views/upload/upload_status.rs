use yew::prelude::*;

use crate::stores::UploadStatus;
use crate::views::shared::Alert;

#[derive(Properties, PartialEq)]
pub struct UploadStatusProps {
    pub status: UploadStatus,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[function_component(UploadStatusPanel)]
pub fn upload_status_panel(props: &UploadStatusProps) -> Html {
    html! {
        <div class="upload-status">
            if let Some(error) = &props.error {
                <Alert message={error.clone()} />
            }
            if props.status == UploadStatus::Uploading {
                <div class="uploading">
                    <span class="spinner" aria-hidden="true"></span>
                    <span>{"Uploading and processing..."}</span>
                </div>
            }
            if props.status == UploadStatus::Success {
                <Alert
                    success=true
                    title="Success"
                    message="Files uploaded successfully. You can now preview the data."
                />
            }
        </div>
    }
}
