use yew::prelude::*;

use super::{LoginForm, SignUpForm};
use crate::hooks::{use_auth, AuthTab};

/// Login / Sign Up tabs on the public landing route
#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let auth = use_auth();
    let tab = auth.state.tab;

    let tab_button = |target: AuthTab, label: &'static str| {
        let onclick = auth.select_tab.reform(move |_: MouseEvent| target);
        html! {
            <button
                type="button"
                role="tab"
                class={classes!("tab", (tab == target).then_some("active"))}
                aria-selected={(tab == target).to_string()}
                {onclick}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="card auth-card">
            <div class="card-header">
                <h1 class="card-title">{"HR Salary Slip Portal"}</h1>
                <p class="card-description">{"Upload payroll and send salary slips to your team."}</p>
            </div>
            <div class="tabs" role="tablist">
                { tab_button(AuthTab::Login, "Login") }
                { tab_button(AuthTab::SignUp, "Sign Up") }
            </div>
            <div class="card-content">
                {
                    match tab {
                        AuthTab::Login => html! {
                            <LoginForm state={auth.state.login.clone()} on_submit={auth.login.clone()} />
                        },
                        AuthTab::SignUp => html! {
                            <SignUpForm state={auth.state.sign_up.clone()} on_submit={auth.sign_up.clone()} />
                        },
                    }
                }
            </div>
        </div>
    }
}
