use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::context::{use_session, use_theme, use_toast, Theme, Toast};

const LINKS: [(Route, &str); 3] = [
    (Route::Home, "Home"),
    (Route::Upload, "Upload"),
    (Route::Profile, "Profile"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let session = use_session();
    let theme = use_theme();
    let toast = use_toast();
    let navigator = use_navigator();
    let current = use_route::<Route>();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let logout = {
        let sign_out = session.sign_out.clone();
        Callback::from(move |_: MouseEvent| {
            sign_out.emit(());
            toast.notify(Toast::info("Logged out"));
            if let Some(nav) = &navigator {
                nav.replace(&Route::Auth);
            }
        })
    };

    let theme_button = theme.map(|ctx| {
        let label = match ctx.theme {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        };
        let onclick = ctx.toggle.reform(|_: MouseEvent| ());
        html! {
            <button class="btn btn-ghost btn-icon" aria-label="Toggle theme" {onclick}>{ label }</button>
        }
    });

    let links = |extra: &'static str| -> Html {
        LINKS
            .iter()
            .map(|(route, label)| {
                let active = current.as_ref() == Some(route);
                html! {
                    <Link<Route> to={route.clone()} classes={classes!("nav-link", extra, active.then_some("active"))}>
                        { *label }
                    </Link<Route>>
                }
            })
            .collect()
    };

    let initials = session.user().map(|u| u.initials()).unwrap_or_default();

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes="navbar-brand">
                    <span class="logo">{"💼"}</span>
                    <span class="brand-name">{"HR Salary Slip Portal"}</span>
                </Link<Route>>

                <div class="navbar-links">{ links("") }</div>

                <div class="navbar-actions">
                    { theme_button.unwrap_or_default() }
                    if !initials.is_empty() {
                        <span class="avatar" title={session.user().map(|u| u.email.clone()).unwrap_or_default()}>{ initials }</span>
                    }
                    <button class="btn btn-outline btn-sm" onclick={logout}>{"Logout"}</button>
                    <button class="btn btn-ghost btn-icon navbar-toggle" aria-label="Menu" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>
            if *menu_open {
                <div class="navbar-mobile">{ links("nav-link-block") }</div>
            }
        </nav>
    }
}
