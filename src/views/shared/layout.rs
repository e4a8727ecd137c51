use yew::prelude::*;

use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Navbar + centred content for logged-in pages
#[function_component(MainLayout)]
pub fn main_layout(props: &LayoutProps) -> Html {
    html! {
        <div class="app-shell">
            <Navbar />
            <main class="container">{ props.children.clone() }</main>
        </div>
    }
}

#[function_component(AuthLayout)]
pub fn auth_layout(props: &LayoutProps) -> Html {
    html! {
        <div class="auth-shell">
            <div class="auth-backdrop" aria-hidden="true"></div>
            <div class="auth-content">{ props.children.clone() }</div>
        </div>
    }
}
