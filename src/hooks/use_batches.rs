// ============================================================================
// USE BATCHES - home page listing and tiles
// ============================================================================
// Tiles and list load independently; either can fail without the other.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use super::use_store::{use_store, StoreHandle};
use crate::context::{use_session, use_toast, SessionContext, Toast};
use crate::services::ApiError;
use crate::stores::BatchStore;
use crate::viewmodels::batch_viewmodel::retry_summary;
use crate::viewmodels::BatchViewModel;

#[derive(Clone)]
pub struct UseBatchesHandle {
    pub state: BatchStore,
    pub reload: Callback<()>,
    pub set_search: Callback<String>,
    pub request_delete: Callback<String>,
    pub cancel_delete: Callback<()>,
    pub confirm_delete: Callback<()>,
    pub send_slips: Callback<String>,
    pub retry_failed: Callback<String>,
    pub toggle_details: Callback<String>,
}

/// Expired or revoked token: drop the session so the guard redirects
fn check_auth(session: &SessionContext, error: &ApiError) {
    if error.is_unauthorized() {
        log::warn!("⚠️ Session rejected by server, logging out");
        session.sign_out.emit(());
    }
}

fn load_batches(store: StoreHandle<BatchStore>, vm: Rc<BatchViewModel>, session: SessionContext) {
    store.update(|s| s.batches_loading = true);
    wasm_bindgen_futures::spawn_local(async move {
        match vm.load_batches().await {
            Ok(batches) => store.update(|s| {
                s.replace(batches);
                s.batches_loading = false;
            }),
            Err(e) => {
                log::error!("❌ Loading batches failed: {}", e);
                check_auth(&session, &e);
                store.update(|s| {
                    s.batches_loading = false;
                    s.batches_error = Some(e.user_message());
                });
            }
        }
    });
}

fn load_stats(store: StoreHandle<BatchStore>, vm: Rc<BatchViewModel>, session: SessionContext) {
    store.update(|s| s.stats_loading = true);
    wasm_bindgen_futures::spawn_local(async move {
        match vm.load_stats().await {
            Ok(stats) => store.update(|s| {
                s.stats = Some(stats);
                s.stats_error = None;
                s.stats_loading = false;
            }),
            Err(e) => {
                log::error!("❌ Loading dashboard failed: {}", e);
                check_auth(&session, &e);
                store.update(|s| {
                    s.stats_loading = false;
                    s.stats_error = Some(e.user_message());
                });
            }
        }
    });
}

#[hook]
pub fn use_batches() -> UseBatchesHandle {
    let store = use_store(|| BatchStore {
        batches_loading: true,
        stats_loading: true,
        ..BatchStore::default()
    });
    let session = use_session();
    let toast = use_toast();
    let vm = use_memo((), {
        let api = session.api.clone();
        move |_| BatchViewModel::new(api)
    });

    {
        let store = store.clone();
        let vm = vm.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            load_stats(store.clone(), vm.clone(), session.clone());
            load_batches(store, vm, session);
            || ()
        });
    }

    let reload = {
        let store = store.clone();
        let vm = vm.clone();
        let session = session.clone();
        Callback::from(move |_| {
            load_stats(store.clone(), vm.clone(), session.clone());
            load_batches(store.clone(), vm.clone(), session.clone());
        })
    };

    let set_search = {
        let store = store.clone();
        Callback::from(move |search: String| store.update(|s| s.search = search))
    };

    let request_delete = {
        let store = store.clone();
        Callback::from(move |batch_id: String| store.update(|s| s.pending_delete = Some(batch_id)))
    };

    let cancel_delete = {
        let store = store.clone();
        Callback::from(move |_| store.update(|s| s.pending_delete = None))
    };

    let confirm_delete = {
        let store = store.clone();
        let vm = vm.clone();
        let session = session.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            let Some(batch_id) = store.get().pending_delete.clone() else {
                return;
            };
            if store.get().is_busy(&batch_id) {
                return;
            }
            store.update(|s| s.set_busy(&batch_id, true));

            let store = store.clone();
            let vm = vm.clone();
            let session = session.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.delete_batch(&batch_id).await;
                match &result {
                    Ok(message) => toast.notify(Toast::success("Upload deleted").with_message(message.clone())),
                    Err(e) => {
                        log::error!("❌ Delete of {} failed: {}", batch_id, e);
                        check_auth(&session, e);
                        toast.notify(Toast::error("Could not delete upload").with_message(e.user_message()));
                    }
                }
                store.update(|s| BatchViewModel::finish_delete(s, &batch_id, &result));
                if result.is_ok() {
                    load_stats(store, vm, session);
                }
            });
        })
    };

    let send_slips = {
        let store = store.clone();
        let vm = vm.clone();
        let session = session.clone();
        let toast = toast.clone();
        Callback::from(move |batch_id: String| {
            if !store.update(|s| BatchViewModel::begin_send(s, &batch_id)) {
                return;
            }

            let store = store.clone();
            let vm = vm.clone();
            let session = session.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.send_slips(&batch_id).await;
                store.update(|s| BatchViewModel::finish_send(s, &batch_id, &result));
                match result {
                    Ok(message) => {
                        toast.notify(Toast::success("Salary slips sent").with_message(message));
                        load_stats(store, vm, session);
                    }
                    Err(e) => {
                        check_auth(&session, &e);
                        toast.notify(Toast::error("Could not send salary slips").with_message(e.user_message()));
                        load_batches(store, vm, session);
                    }
                }
            });
        })
    };

    let retry_failed = {
        let store = store.clone();
        let vm = vm.clone();
        let session = session.clone();
        let toast = toast.clone();
        Callback::from(move |batch_id: String| {
            if store.get().is_busy(&batch_id) {
                return;
            }
            store.update(|s| s.set_busy(&batch_id, true));

            let store = store.clone();
            let vm = vm.clone();
            let session = session.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.retry_failed(&batch_id).await;
                store.update(|s| s.set_busy(&batch_id, false));
                match result {
                    Ok(response) => toast.notify(Toast::info("Retry finished").with_message(retry_summary(&response))),
                    Err(e) => {
                        check_auth(&session, &e);
                        toast.notify(Toast::error("Retry failed").with_message(e.user_message()));
                    }
                }
                load_batches(store, vm, session);
            });
        })
    };

    let toggle_details = {
        let store = store.clone();
        Callback::from(move |batch_id: String| {
            let collapse = store.get().expanded.as_deref() == Some(batch_id.as_str());
            store.update(|s| s.expanded = if collapse { None } else { Some(batch_id.clone()) });
            if collapse {
                return;
            }

            let store = store.clone();
            let vm = vm.clone();
            let session = session.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match vm.status(&batch_id).await {
                    Ok(status) => store.update(|s| {
                        s.details.insert(batch_id, status);
                    }),
                    Err(e) => {
                        check_auth(&session, &e);
                        toast.notify(Toast::error("Could not load batch status").with_message(e.user_message()));
                    }
                }
            });
        })
    };

    UseBatchesHandle {
        state: store.snapshot(),
        reload,
        set_search,
        request_delete,
        cancel_delete,
        confirm_delete,
        send_slips,
        retry_failed,
        toggle_details,
    }
}
