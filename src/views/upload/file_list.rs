use yew::prelude::*;

use crate::models::SelectedFile;
use crate::utils::format_file_size;

#[derive(Properties, PartialEq)]
pub struct FileListProps {
    pub file: SelectedFile,
    #[prop_or_default]
    pub disabled: bool,
    pub on_remove: Callback<()>,
}

#[function_component(FileList)]
pub fn file_list(props: &FileListProps) -> Html {
    html! {
        <div class="file-list">
            <h4>{"Selected file"}</h4>
            <div class="file-item">
                <span class="file-icon" aria-hidden="true">{"📄"}</span>
                <div class="file-meta">
                    <span class="file-name truncate">{ props.file.name.clone() }</span>
                    <span class="muted">{ format_file_size(props.file.size) }</span>
                </div>
                <button
                    type="button"
                    class="btn btn-ghost btn-sm"
                    aria-label="Remove file"
                    disabled={props.disabled}
                    onclick={props.on_remove.reform(|_: MouseEvent| ())}
                >
                    {"✕"}
                </button>
            </div>
        </div>
    }
}
