//! Admin dashboard shell. Only reachable through a `RouteGuard` requiring
//! the admin role.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use session::guard::HOME_ROUTE;

use crate::components::user_menu::UserMenu;
use crate::state::auth::use_auth;
use crate::state::ui::UiState;

/// Comma-separated role list for the identity panel.
fn role_summary(roles: &[String]) -> String {
    if roles.is_empty() {
        "none".to_owned()
    } else {
        roles.join(", ")
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let state = use_auth().state;
    let ui = expect_context::<RwSignal<UiState>>();

    let username = move || state.get().user.map(|user| user.username).unwrap_or_default();
    let roles = move || state.get().user.map(|user| role_summary(&user.roles)).unwrap_or_default();
    let collapsed = move || ui.get().sidebar_collapsed;

    view! {
        <div class="admin-page" class:admin-page--collapsed=collapsed>
            <aside class="admin-page__sidebar">
                <button
                    class="admin-page__sidebar-toggle"
                    type="button"
                    on:click=move |_| ui.update(UiState::toggle_sidebar)
                >
                    {move || if collapsed() { "»" } else { "«" }}
                </button>
                <Show when=move || !collapsed()>
                    <nav class="admin-page__nav">
                        <a href="/admin">"Overview"</a>
                        <a href=HOME_ROUTE>"Back to portal"</a>
                    </nav>
                </Show>
            </aside>
            <section class="admin-page__content">
                <header class="admin-page__header">
                    <h1>"Admin dashboard"</h1>
                    <UserMenu/>
                </header>
                <dl class="admin-page__identity">
                    <dt>"Signed in as"</dt>
                    <dd>{username}</dd>
                    <dt>"Roles"</dt>
                    <dd>{roles}</dd>
                </dl>
            </section>
        </div>
    }
}
