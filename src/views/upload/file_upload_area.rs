use web_sys::{DragEvent, FileList, HtmlInputElement};
use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::SelectedFile;

#[derive(Properties, PartialEq)]
pub struct FileUploadAreaProps {
    pub on_files: Callback<Vec<SelectedFile>>,
    #[prop_or_default]
    pub disabled: bool,
}

fn collect_files(list: Option<FileList>) -> Vec<SelectedFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(SelectedFile::from_web_file)
        .collect()
}

/// Drop zone plus a hidden file input behind "Browse Files"
#[function_component(FileUploadArea)]
pub fn file_upload_area(props: &FileUploadAreaProps) -> Html {
    let dragging = use_state(|| false);
    let input_ref = use_node_ref();

    let on_drag_over = {
        let dragging = dragging.clone();
        let disabled = props.disabled;
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            if !disabled {
                dragging.set(true);
            }
        })
    };

    let on_drag_leave = {
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            dragging.set(false);
        })
    };

    let on_drop = {
        let dragging = dragging.clone();
        let on_files = props.on_files.clone();
        let disabled = props.disabled;
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            dragging.set(false);
            if disabled {
                return;
            }
            let files = collect_files(e.data_transfer().and_then(|dt| dt.files()));
            on_files.emit(files);
        })
    };

    let on_change = {
        let on_files = props.on_files.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let files = collect_files(input.files());
            // Reset so picking the same file again still fires `change`
            input.set_value("");
            on_files.emit(files);
        })
    };

    let on_browse = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let upload = &CONFIG.upload;

    html! {
        <div
            class={classes!("drop-zone", (*dragging).then_some("dragging"), props.disabled.then_some("disabled"))}
            ondragenter={on_drag_over.clone()}
            ondragover={on_drag_over}
            ondragleave={on_drag_leave}
            ondrop={on_drop}
        >
            <div class="drop-zone-icon" aria-hidden="true">{"☁️"}</div>
            <h3>{"Drag & drop your Excel file here"}</h3>
            <p class="muted">
                { format!("Upload a single Excel file ({}) up to {}MB", upload.accept_attr().replace(',', ", "), upload.max_size_mb) }
            </p>
            <button type="button" class="btn btn-outline" onclick={on_browse} disabled={props.disabled}>
                {"Browse Files"}
            </button>
            <input
                ref={input_ref}
                type="file"
                class="hidden"
                accept={upload.accept_attr()}
                multiple=true
                onchange={on_change}
            />
        </div>
    }
}
