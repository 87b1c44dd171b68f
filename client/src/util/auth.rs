//! Route guard shared by every protected screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! All protected routes apply identical loading/redirect/forbidden behavior.
//! The decision itself is `session::guard::evaluate`; this module only
//! renders it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use session::{GuardDecision, evaluate};

use crate::components::loading::LoadingScreen;
use crate::pages::not_authorized::NotAuthorizedPage;
use crate::state::auth::use_auth;

/// Render `children` only for a signed-in user holding one of `roles`.
///
/// Empty `roles` admits any signed-in user. While the bootstrap probe is
/// pending a loading screen is shown instead of redirecting.
#[component]
pub fn RouteGuard(#[prop(optional)] roles: Vec<String>, children: ChildrenFn) -> impl IntoView {
    let state = use_auth().state;
    let location = use_location();

    move || {
        let requested = requested_location(&location.pathname.get(), &location.search.get());
        match evaluate(&state.get(), roles.as_slice(), &requested) {
            GuardDecision::Loading => view! { <LoadingScreen/> }.into_any(),
            GuardDecision::RedirectToLogin { location: target } => view! { <Redirect path=target/> }.into_any(),
            GuardDecision::NotAuthorized => view! { <NotAuthorizedPage/> }.into_any(),
            GuardDecision::Render => children().into_any(),
        }
    }
}

/// Path plus query string, tolerating a search part with or without its
/// leading `?`.
pub fn requested_location(pathname: &str, search: &str) -> String {
    let path = if pathname.is_empty() { "/" } else { pathname };
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{query}")
    }
}
