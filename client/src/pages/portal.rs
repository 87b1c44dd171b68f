//! Portal landing page for any signed-in user.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use leptos::prelude::*;
use session::CurrentUser;

use crate::components::user_menu::UserMenu;
use crate::state::auth::use_auth;

fn greeting(user: Option<&CurrentUser>) -> String {
    match user {
        Some(user) => format!("Welcome, {}", user.display_name()),
        None => "Welcome".to_owned(),
    }
}

#[component]
pub fn PortalPage() -> impl IntoView {
    let state = use_auth().state;
    let is_admin = move || state.get().user.is_some_and(|user| user.is_admin());

    view! {
        <div class="portal-page">
            <header class="portal-page__header">
                <span class="portal-page__brand">"lchaty"</span>
                <Show when=is_admin>
                    <a class="portal-page__admin-link" href="/admin">"Admin dashboard"</a>
                </Show>
                <UserMenu/>
            </header>
            <main class="portal-page__main">
                <h1>{move || greeting(state.get().user.as_ref())}</h1>
                <p>"Pick a conversation to get started."</p>
            </main>
        </div>
    }
}
