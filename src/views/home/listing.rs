// ============================================================================
// LISTING - uploaded batches with search and per-row actions
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use super::BatchDetails;
use crate::app::Route;
use crate::models::UploadBatch;
use crate::stores::BatchStore;
use crate::utils::{format_date, format_date_time};
use crate::views::shared::{ColumnDef, DataTable, HideBelow, TableRow};

impl TableRow for UploadBatch {
    fn key(&self) -> String {
        self.batch_id.clone()
    }

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("ID"),
            ColumnDef::new("Upload Date").hide_below(HideBelow::Md),
            ColumnDef::new("Month"),
            ColumnDef::new("Employees").right().hide_below(HideBelow::Sm),
            ColumnDef::new("Status"),
            ColumnDef::new("File").hide_below(HideBelow::Lg),
        ]
    }

    fn cell(&self, index: usize) -> Html {
        match index {
            0 => html! { <span class="mono">{ self.batch_id.clone() }</span> },
            1 => html! { <span title={format_date_time(&self.upload_time)}>{ format_date(&self.upload_time) }</span> },
            2 => html! { <>{ self.period_label() }</> },
            3 => html! { <>{ self.record_count }</> },
            4 => html! {
                <span class={self.status.badge_class()}>{ self.status.label() }</span>
            },
            5 => html! { <span class="muted truncate" title={self.file_name.clone()}>{ self.file_name.clone() }</span> },
            _ => html! {},
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ListingProps {
    pub state: BatchStore,
    pub set_search: Callback<String>,
    pub send_slips: Callback<String>,
    pub retry_failed: Callback<String>,
    pub request_delete: Callback<String>,
    pub toggle_details: Callback<String>,
}

#[function_component(Listing)]
pub fn listing(props: &ListingProps) -> Html {
    let state = &props.state;
    let rows = state.filtered();

    let oninput = {
        let set_search = props.set_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            set_search.emit(input.value());
        })
    };

    let actions = {
        let busy = state.busy.clone();
        let expanded = state.expanded.clone();
        let send_slips = props.send_slips.clone();
        let retry_failed = props.retry_failed.clone();
        let request_delete = props.request_delete.clone();
        let toggle_details = props.toggle_details.clone();
        Callback::from(move |batch: UploadBatch| {
            let id = batch.batch_id.clone();
            let is_busy = busy.contains(&id);
            let is_open = expanded.as_deref() == Some(id.as_str());
            let on_send = {
                let id = id.clone();
                send_slips.reform(move |_: MouseEvent| id.clone())
            };
            let on_retry = {
                let id = id.clone();
                retry_failed.reform(move |_: MouseEvent| id.clone())
            };
            let on_details = {
                let id = id.clone();
                toggle_details.reform(move |_: MouseEvent| id.clone())
            };
            let on_delete = request_delete.reform(move |_: MouseEvent| id.clone());

            html! {
                <div class="row-actions">
                    if batch.status.can_send_slips() {
                        <button class="btn btn-primary btn-sm" onclick={on_send} disabled={is_busy}>
                            { if is_busy { "Sending..." } else { "Send" } }
                        </button>
                    }
                    if batch.status.can_retry() {
                        <button class="btn btn-outline btn-sm" onclick={on_retry} disabled={is_busy}>
                            { if is_busy { "Retrying..." } else { "Retry failed" } }
                        </button>
                    }
                    <button class="btn btn-ghost btn-sm" onclick={on_details} aria-expanded={is_open.to_string()}>
                        { if is_open { "Hide" } else { "Details" } }
                    </button>
                    <button class="btn btn-ghost btn-sm text-destructive" onclick={on_delete} disabled={is_busy}>
                        {"Delete"}
                    </button>
                </div>
            }
        })
    };

    let expansion = {
        let details = state.details.clone();
        Callback::from(move |batch: UploadBatch| {
            html! { <BatchDetails status={details.get(&batch.batch_id).cloned()} /> }
        })
    };

    let empty_message = if state.batches.is_empty() && state.search.trim().is_empty() {
        "No uploads yet. Upload a salary file to get started."
    } else {
        "No results found."
    };

    html! {
        <section class="card listing">
            <div class="card-header listing-header">
                <div>
                    <h2 class="card-title">{"Recent Uploads"}</h2>
                    <p class="card-description">{"Salary files uploaded to the portal"}</p>
                </div>
                <div class="listing-tools">
                    <input
                        type="search"
                        class="input search-input"
                        placeholder="Search by month or ID..."
                        value={state.search.clone()}
                        {oninput}
                    />
                    <Link<Route> to={Route::Upload} classes="btn btn-primary">{"+ New Upload"}</Link<Route>>
                </div>
            </div>
            if let Some(error) = &state.batches_error {
                <div class="listing-error" role="alert">{ error.clone() }</div>
            }
            <DataTable<UploadBatch>
                {rows}
                loading={state.batches_loading}
                empty_message={empty_message}
                actions={Some(actions)}
                expanded={state.expanded.clone()}
                expansion={Some(expansion)}
            />
            <div class="card-footer muted">{ state.footer_text() }</div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_rows_are_keyed_by_id() {
        let batch = UploadBatch {
            batch_id: "42".into(),
            ..UploadBatch::default()
        };
        assert_eq!(batch.key(), "42");
        assert_eq!(UploadBatch::columns().len(), 6);
        assert_eq!(UploadBatch::columns()[0].header, "ID");
    }
}
