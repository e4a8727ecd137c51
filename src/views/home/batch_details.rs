use yew::prelude::*;

use crate::models::ProcessingStatus;

#[derive(Properties, PartialEq)]
pub struct BatchDetailsProps {
    pub status: Option<ProcessingStatus>,
}

/// Delivery progress of one batch, shown under its row
#[function_component(BatchDetails)]
pub fn batch_details(props: &BatchDetailsProps) -> Html {
    let Some(status) = &props.status else {
        return html! { <div class="batch-details muted">{"Loading status..."}</div> };
    };

    let percent = status.completion_percentage.clamp(0.0, 100.0);

    html! {
        <div class="batch-details">
            <div class="progress-label">
                <span>{ format!("{} records", status.total_records) }</span>
                <span>{ format!("{:.0}% complete", percent) }</span>
            </div>
            <div class="progress" role="progressbar" aria-valuenow={format!("{:.0}", percent)}>
                <div class="progress-bar" style={format!("width: {:.1}%", percent)}></div>
            </div>
            <ul class="status-counts">
                { for status.sorted_counts().into_iter().map(|(name, count)| html! {
                    <li key={name.clone()}>
                        <span class="badge badge-outline">{ name }</span>
                        <span>{ count }</span>
                    </li>
                }) }
            </ul>
            if !status.errors.is_empty() {
                <div class="record-errors">
                    <h4>{"Failed deliveries"}</h4>
                    <ul>
                        { for status.errors.iter().map(|e| html! {
                            <li key={e.employee_id.clone()}>
                                <span class="mono">{ e.employee_id.clone() }</span>
                                {" "}
                                <span>{ e.name.clone() }</span>
                                {": "}
                                <span class="muted">{ e.message.clone().unwrap_or_else(|| "Unknown error".into()) }</span>
                            </li>
                        }) }
                    </ul>
                </div>
            }
        </div>
    }
}
