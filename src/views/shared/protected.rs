use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{resolve_route_access, Route, RouteAccess};
use crate::context::use_session;

#[derive(Properties, PartialEq)]
pub struct ProtectedProps {
    pub route: Route,
    pub children: Children,
}

/// Renders the page or redirects, depending on whether a session exists
#[function_component(Protected)]
pub fn protected(props: &ProtectedProps) -> Html {
    let session = use_session();

    match resolve_route_access(&props.route, session.is_authenticated()) {
        RouteAccess::Render => html! { <>{ props.children.clone() }</> },
        RouteAccess::Redirect(to) => {
            log::info!("↪️ {:?} -> {:?}", props.route, to);
            html! { <Redirect<Route> {to} /> }
        }
    }
}
