//! Route-guard decision, independent of any UI toolkit.
//!
//! The Leptos `RouteGuard` component renders whatever [`evaluate`] returns;
//! keeping the decision here lets it be tested without a reactive runtime.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::store::AuthState;

pub const LOGIN_ROUTE: &str = "/login";
pub const SIGNUP_ROUTE: &str = "/signup";
pub const HOME_ROUTE: &str = "/";
/// Query parameter carrying the originally requested location.
pub const NEXT_PARAM: &str = "next";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Bootstrap still pending; show a placeholder, do not redirect yet.
    Loading,
    RedirectToLogin { location: String },
    /// Signed in but lacking every required role. Rendered in place so there
    /// is no redirect loop.
    NotAuthorized,
    Render,
}

/// Decide what a protected route shows.
///
/// `required_roles` empty means any signed-in user. `requested` is the path
/// plus query the user asked for; it is preserved in the login redirect.
pub fn evaluate<S: AsRef<str>>(state: &AuthState, required_roles: &[S], requested: &str) -> GuardDecision {
    if state.loading {
        return GuardDecision::Loading;
    }
    match &state.user {
        None => GuardDecision::RedirectToLogin {
            location: login_redirect(requested),
        },
        Some(user) if !user.has_any_role(required_roles) => GuardDecision::NotAuthorized,
        Some(_) => GuardDecision::Render,
    }
}

/// `/login?next=<requested>`, or bare `/login` when there is nothing worth
/// returning to.
#[must_use]
pub fn login_redirect(requested: &str) -> String {
    if requested == HOME_ROUTE || !is_safe_return_path(requested) {
        return LOGIN_ROUTE.to_owned();
    }
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(NEXT_PARAM, requested)
        .finish();
    format!("{LOGIN_ROUTE}?{query}")
}

/// Where to go after a successful sign-in. Only same-origin paths outside
/// the auth screens are honored; everything else lands on `/`.
#[must_use]
pub fn post_login_target(next: Option<&str>) -> String {
    next.map(str::trim)
        .filter(|path| is_safe_return_path(path))
        .unwrap_or(HOME_ROUTE)
        .to_owned()
}

fn is_safe_return_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.starts_with("/\\")
        && !is_auth_route(path)
}

fn is_auth_route(path: &str) -> bool {
    let route = path.split(['?', '#']).next().unwrap_or(path).trim_end_matches('/');
    route == LOGIN_ROUTE || route == SIGNUP_ROUTE
}
