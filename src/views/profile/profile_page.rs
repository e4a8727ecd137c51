use yew::prelude::*;

use super::ChangePasswordForm;
use crate::hooks::use_profile;
use crate::utils::format_date;
use crate::views::shared::Alert;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let profile = use_profile();
    let dialog_open = use_state(|| false);

    let open = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |_: MouseEvent| dialog_open.set(true))
    };
    let close = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |_: ()| dialog_open.set(false))
    };

    let body = match (&profile.user, profile.loading) {
        (None, true) => html! {
            <div class="profile-skeleton">
                <div class="skeleton skeleton-avatar"></div>
                <div class="skeleton skeleton-line"></div>
                <div class="skeleton skeleton-line"></div>
            </div>
        },
        (None, false) => html! {
            <Alert message={profile.error.clone().unwrap_or_else(|| "Could not load your profile.".into())} />
        },
        (Some(user), _) => html! {
            <>
                <div class="profile-header">
                    <div class="avatar avatar-lg">{ user.initials() }</div>
                    <div>
                        <h2 class="profile-name">{ user.username.clone() }</h2>
                        <span class="badge badge-outline">{ user.role.clone() }</span>
                    </div>
                </div>
                <dl class="profile-fields">
                    <dt>{"Email"}</dt>
                    <dd>{ user.email.clone() }</dd>
                    if let Some(created) = &user.created_at {
                        <dt>{"Member since"}</dt>
                        <dd>{ format_date(created) }</dd>
                    }
                </dl>
                if let Some(error) = &profile.error {
                    <p class="muted">{ format!("Showing saved details: {}", error) }</p>
                }
            </>
        },
    };

    html! {
        <div class="page profile-page">
            <div class="page-header">
                <h1 class="page-title">{"Profile"}</h1>
            </div>
            <div class="card">
                <div class="card-content">{ body }</div>
                <div class="card-footer">
                    <button class="btn btn-outline" onclick={open} disabled={profile.user.is_none()}>
                        {"Change Password"}
                    </button>
                </div>
            </div>
            if *dialog_open {
                <div class="dialog-backdrop">
                    <div class="dialog" role="dialog" aria-modal="true">
                        <h2 class="dialog-title">{"Change Password"}</h2>
                        <p class="dialog-message">{"Enter your current password and choose a new one."}</p>
                        <ChangePasswordForm on_close={close} />
                    </div>
                </div>
            }
        </div>
    }
}
