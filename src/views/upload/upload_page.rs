// ============================================================================
// UPLOAD PAGE - "Upload Files" and "Data Preview" tabs
// ============================================================================

use yew::prelude::*;

use super::{DataPreview, FileList, FileUploadArea, Guidelines, Parameters, UploadStatusPanel};
use crate::hooks::use_upload;
use crate::stores::{UploadStatus, UploadTab};

#[function_component(UploadPage)]
pub fn upload_page() -> Html {
    let upload = use_upload();
    let state = &upload.state;
    let uploading = state.is_uploading();
    let can_preview = state.can_preview();

    let on_upload_tab = upload.select_tab.reform(|_: MouseEvent| UploadTab::Upload);
    let on_preview_tab = upload.select_tab.reform(|_: MouseEvent| UploadTab::Preview);
    let on_submit = upload.submit.reform(|_: MouseEvent| ());
    let on_clear = upload.clear.reform(|_: MouseEvent| ());

    let submit_label = match state.status {
        UploadStatus::Uploading => "Uploading...",
        UploadStatus::Success => "Uploaded",
        UploadStatus::Idle | UploadStatus::Error => "Upload Files",
    };

    let upload_tab = html! {
        <div class="upload-grid">
            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Upload Salary Data"}</h2>
                    <p class="card-description">{"Select the payroll period and the spreadsheet to process."}</p>
                </div>
                <div class="card-content stack">
                    <Parameters
                        month={state.month.clone()}
                        year={state.year.clone()}
                        disabled={uploading}
                        on_month={upload.set_month.clone()}
                        on_year={upload.set_year.clone()}
                    />
                    <FileUploadArea
                        on_files={upload.select_files.clone()}
                        disabled={uploading}
                    />
                    if let Some(file) = &state.file {
                        <FileList
                            file={file.clone()}
                            disabled={uploading}
                            on_remove={upload.remove_file.clone()}
                        />
                    }
                    <UploadStatusPanel
                        status={state.status}
                        error={state.error.clone().map(AttrValue::from)}
                    />
                </div>
                <div class="card-footer space-between">
                    <button
                        class="btn btn-outline"
                        onclick={on_clear}
                        disabled={uploading || (state.file.is_none() && state.error.is_none())}
                    >
                        {"Clear All"}
                    </button>
                    <button class="btn btn-primary" onclick={on_submit} disabled={!state.can_submit()}>
                        { submit_label }
                    </button>
                </div>
            </div>
            <Guidelines />
        </div>
    };

    html! {
        <div class="page upload-page">
            <div class="page-header">
                <h1 class="page-title">{"Upload Salary Data"}</h1>
            </div>
            <div class="tabs" role="tablist">
                <button
                    type="button"
                    role="tab"
                    class={classes!("tab", (state.active_tab == UploadTab::Upload).then_some("active"))}
                    onclick={on_upload_tab}
                >
                    {"Upload Files"}
                </button>
                <button
                    type="button"
                    role="tab"
                    class={classes!("tab", (state.active_tab == UploadTab::Preview).then_some("active"))}
                    disabled={!can_preview}
                    onclick={on_preview_tab}
                >
                    {"Data Preview"}
                </button>
            </div>
            {
                match (state.active_tab, &state.preview) {
                    (UploadTab::Preview, Some(details)) if can_preview => html! {
                        <DataPreview
                            details={details.clone()}
                            sending={state.sending_slips}
                            sent={state.slips_sent}
                            on_back={upload.select_tab.reform(|_: MouseEvent| UploadTab::Upload)}
                            on_generate={upload.generate_slips.clone()}
                        />
                    },
                    _ => upload_tab,
                }
            }
        </div>
    }
}
