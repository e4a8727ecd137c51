// ============================================================================
// USE UPLOAD - upload page state machine
// ============================================================================

use std::rc::Rc;

use chrono::Local;
use yew::prelude::*;

use super::use_store::use_store;
use crate::config::CONFIG;
use crate::context::{use_session, use_toast, Toast};
use crate::models::SelectedFile;
use crate::stores::{UploadStore, UploadTab};
use crate::utils::default_period;
use crate::viewmodels::upload_viewmodel::{validate_selection, validate_submission, UploadError};
use crate::viewmodels::UploadViewModel;

#[derive(Clone)]
pub struct UseUploadHandle {
    pub state: UploadStore,
    pub select_files: Callback<Vec<SelectedFile>>,
    pub remove_file: Callback<()>,
    pub clear: Callback<()>,
    pub set_month: Callback<String>,
    pub set_year: Callback<String>,
    pub select_tab: Callback<UploadTab>,
    pub submit: Callback<()>,
    pub generate_slips: Callback<()>,
}

#[hook]
pub fn use_upload() -> UseUploadHandle {
    let store = use_store(|| {
        let (month, year) = default_period(Local::now().date_naive());
        UploadStore::new(month, year)
    });
    let session = use_session();
    let toast = use_toast();
    let vm = use_memo((), {
        let api = session.api.clone();
        move |_| UploadViewModel::new(api, CONFIG.upload.clone())
    });

    let select_files = {
        let store = store.clone();
        let vm = vm.clone();
        Callback::from(move |files: Vec<SelectedFile>| {
            if store.get().is_uploading() {
                return;
            }
            match validate_selection(files, vm.config()) {
                Ok(file) => {
                    log::info!("📄 Selected {} ({} bytes)", file.name, file.size);
                    store.update(|s| s.set_file(file));
                }
                Err(e) => {
                    log::warn!("⚠️ File rejected: {}", e);
                    store.update(|s| s.reject_selection(e.user_message()));
                }
            }
        })
    };

    let remove_file = {
        let store = store.clone();
        Callback::from(move |_| {
            store.update(|s| s.remove_file());
        })
    };

    let clear = {
        let store = store.clone();
        Callback::from(move |_| {
            store.update(|s| s.clear());
        })
    };

    let set_month = {
        let store = store.clone();
        Callback::from(move |month: String| store.update(|s| s.set_period(Some(month), None)))
    };

    let set_year = {
        let store = store.clone();
        Callback::from(move |year: String| store.update(|s| s.set_period(None, Some(year))))
    };

    let select_tab = {
        let store = store.clone();
        Callback::from(move |tab: UploadTab| {
            store.update(|s| s.select_tab(tab));
        })
    };

    let submit = {
        let store = store.clone();
        let vm = vm.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            let snapshot = store.snapshot();
            if snapshot.is_uploading() {
                return;
            }
            if let Err(e) = validate_submission(
                snapshot.file.as_ref(),
                &snapshot.month,
                &snapshot.year,
                vm.config(),
            ) {
                store.update(|s| s.block_submit(e.user_message()));
                return;
            }
            store.update(|s| s.begin_upload());

            let store = store.clone();
            let vm = Rc::clone(&vm);
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm
                    .upload(snapshot.file.as_ref(), &snapshot.month, &snapshot.year)
                    .await;
                match result {
                    Ok(details) => {
                        toast.notify(Toast::success("File uploaded").with_message(
                            "Salary data processed. Review the preview before sending slips.",
                        ));
                        store.update(|s| s.finish_success(details));
                    }
                    Err(e) => {
                        log::error!("❌ Upload failed: {}", e);
                        if let UploadError::Api(api_error) = &e {
                            toast.notify(Toast::error("Upload failed").with_message(api_error.user_message()));
                        }
                        store.update(|s| s.finish_error(e.user_message()));
                    }
                }
            });
        })
    };

    let generate_slips = {
        let store = store.clone();
        Callback::from(move |_| {
            let batch_id = {
                let state = store.get();
                if state.sending_slips || state.slips_sent {
                    return;
                }
                state
                    .preview
                    .as_ref()
                    .map(|p| p.batch_id.clone())
                    .unwrap_or_default()
            };
            store.update(|s| s.sending_slips = true);

            let store = store.clone();
            let vm = Rc::clone(&vm);
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match vm.generate_slips(&batch_id).await {
                    Ok(message) => {
                        toast.notify(Toast::success("Salary slips sent").with_message(message));
                        store.update(|s| {
                            s.sending_slips = false;
                            s.slips_sent = true;
                        });
                    }
                    Err(e) => {
                        log::error!("❌ Generating slips failed: {}", e);
                        toast.notify(Toast::error("Could not send salary slips").with_message(e.user_message()));
                        store.update(|s| s.sending_slips = false);
                    }
                }
            });
        })
    };

    UseUploadHandle {
        state: store.snapshot(),
        select_files,
        remove_file,
        clear,
        set_month,
        set_year,
        select_tab,
        submit,
        generate_slips,
    }
}
