// ============================================================================
// APP - providers, routes, access rules
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::{SessionProvider, ThemeProvider, ToastProvider};
use crate::views::auth::AuthPage;
use crate::views::home::HomePage;
use crate::views::profile::ProfilePage;
use crate::views::shared::{AuthLayout, MainLayout, NotFound, Protected};
use crate::views::upload::UploadPage;

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Auth,
    #[at("/home")]
    Home,
    #[at("/upload")]
    Upload,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Home | Route::Upload | Route::Profile)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum RouteAccess {
    Render,
    Redirect(Route),
}

/// No token: protected pages send the user to the login screen.
/// With a token the login screen forwards to the home page.
pub fn resolve_route_access(route: &Route, has_token: bool) -> RouteAccess {
    match (route.requires_auth(), has_token) {
        (true, false) => RouteAccess::Redirect(Route::Auth),
        (false, true) if *route == Route::Auth => RouteAccess::Redirect(Route::Home),
        _ => RouteAccess::Render,
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Auth => html! {
            <Protected route={Route::Auth}>
                <AuthLayout>
                    <AuthPage />
                </AuthLayout>
            </Protected>
        },
        Route::Home => html! {
            <Protected route={Route::Home}>
                <MainLayout>
                    <HomePage />
                </MainLayout>
            </Protected>
        },
        Route::Upload => html! {
            <Protected route={Route::Upload}>
                <MainLayout>
                    <UploadPage />
                </MainLayout>
            </Protected>
        },
        Route::Profile => html! {
            <Protected route={Route::Profile}>
                <MainLayout>
                    <ProfilePage />
                </MainLayout>
            </Protected>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <ToastProvider>
                <SessionProvider>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </SessionProvider>
            </ToastProvider>
        </ThemeProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_routes_need_a_token() {
        for route in [Route::Home, Route::Upload, Route::Profile] {
            assert_eq!(resolve_route_access(&route, false), RouteAccess::Redirect(Route::Auth));
            assert_eq!(resolve_route_access(&route, true), RouteAccess::Render);
        }
    }

    #[test]
    fn logged_in_users_skip_the_login_screen() {
        assert_eq!(resolve_route_access(&Route::Auth, true), RouteAccess::Redirect(Route::Home));
        assert_eq!(resolve_route_access(&Route::Auth, false), RouteAccess::Render);
    }

    #[test]
    fn not_found_is_public() {
        assert_eq!(resolve_route_access(&Route::NotFound, false), RouteAccess::Render);
        assert_eq!(resolve_route_access(&Route::NotFound, true), RouteAccess::Render);
    }

    #[test]
    fn paths() {
        assert_eq!(Route::Home.to_path(), "/home");
        assert_eq!(Route::Auth.to_path(), "/");
        assert_eq!(Route::recognize("/upload"), Some(Route::Upload));
    }
}
