use yew::prelude::*;

use super::{Listing, Tiles};
use crate::hooks::use_batches;
use crate::views::shared::ConfirmDialog;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let batches = use_batches();
    let state = &batches.state;

    let deleting = state
        .pending_delete
        .as_deref()
        .map(|id| state.is_busy(id))
        .unwrap_or(false);
    let delete_message = state
        .pending_delete
        .as_deref()
        .map(|id| {
            format!(
                "Upload {} and all of its salary records will be permanently removed. This cannot be undone.",
                id
            )
        })
        .unwrap_or_default();

    html! {
        <div class="page home-page">
            <div class="page-header">
                <h1 class="page-title">{"Dashboard"}</h1>
                <button
                    class="btn btn-outline btn-sm"
                    onclick={batches.reload.reform(|_: MouseEvent| ())}
                    disabled={state.batches_loading}
                >
                    {"↻ Refresh"}
                </button>
            </div>

            <Tiles
                stats={state.stats.clone()}
                loading={state.stats_loading}
                error={state.stats_error.clone().map(AttrValue::from)}
            />

            <Listing
                state={state.clone()}
                set_search={batches.set_search.clone()}
                send_slips={batches.send_slips.clone()}
                retry_failed={batches.retry_failed.clone()}
                request_delete={batches.request_delete.clone()}
                toggle_details={batches.toggle_details.clone()}
            />

            <ConfirmDialog
                open={state.pending_delete.is_some()}
                title="Delete upload?"
                message={delete_message}
                confirm_label="Delete"
                destructive=true
                busy={deleting}
                on_confirm={batches.confirm_delete.clone()}
                on_cancel={batches.cancel_delete.clone()}
            />
        </div>
    }
}
