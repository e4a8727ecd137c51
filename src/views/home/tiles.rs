use yew::prelude::*;

use crate::models::DashboardStats;
use crate::utils::format_date;

#[derive(Properties, PartialEq)]
pub struct TilesProps {
    pub stats: Option<DashboardStats>,
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[derive(Properties, PartialEq)]
struct TileProps {
    title: AttrValue,
    icon: AttrValue,
    value: Option<String>,
    caption: AttrValue,
    loading: bool,
    error: Option<AttrValue>,
}

#[function_component(Tile)]
fn tile(props: &TileProps) -> Html {
    html! {
        <div class="card tile">
            <div class="tile-header">
                <span class="tile-title">{ props.title.clone() }</span>
                <span class="tile-icon" aria-hidden="true">{ props.icon.clone() }</span>
            </div>
            {
                if props.loading {
                    html! { <div class="skeleton skeleton-value"></div> }
                } else if let Some(error) = &props.error {
                    html! { <div class="tile-error">{ error.clone() }</div> }
                } else {
                    html! { <div class="tile-value">{ props.value.clone().unwrap_or_else(|| "-".into()) }</div> }
                }
            }
            <p class="tile-caption">{ props.caption.clone() }</p>
        </div>
    }
}

/// The four dashboard counters
#[function_component(Tiles)]
pub fn tiles(props: &TilesProps) -> Html {
    let stats = props.stats.as_ref();
    let latest = stats.map(|s| {
        if s.latest_upload_date.is_empty() {
            "No uploads yet".to_string()
        } else {
            format_date(&s.latest_upload_date)
        }
    });

    html! {
        <div class="tiles">
            <Tile
                title="Total Uploads"
                icon="📁"
                value={stats.map(|s| s.total_uploads.to_string())}
                caption="Salary files uploaded"
                loading={props.loading}
                error={props.error.clone()}
            />
            <Tile
                title="Latest Upload"
                icon="🕒"
                value={latest}
                caption="Most recent payroll file"
                loading={props.loading}
                error={props.error.clone()}
            />
            <Tile
                title="Emails Sent"
                icon="✉️"
                value={stats.map(|s| s.total_emails_sent.to_string())}
                caption="Salary slips delivered"
                loading={props.loading}
                error={props.error.clone()}
            />
            <Tile
                title="Pending Approvals"
                icon="⏳"
                value={stats.map(|s| s.pending_approvals.to_string())}
                caption="Uploads waiting to be sent"
                loading={props.loading}
                error={props.error.clone()}
            />
        </div>
    }
}
