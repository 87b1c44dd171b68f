//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use session::AuthStore;
use session::types::ADMIN_ROLE;

use crate::net::api_client;
use crate::pages::{
    admin::AdminPage, login::LoginPage, portal::PortalPage, signup::SignupPage,
};
use crate::state::auth::AuthContext;
use crate::state::ui::UiState;
use crate::util::auth::RouteGuard;
use crate::util::dark_mode;

/// Root application component.
///
/// Starts the session bootstrap before the first render so every guarded
/// route begins in the loading state rather than redirecting.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new(AuthStore::new(api_client()));
    auth.spawn_bootstrap();
    auth.spawn_session_refresh();
    provide_context(auth);

    let ui = RwSignal::new(UiState::load());
    provide_context(ui);

    Effect::new(move || {
        let prefs = ui.get();
        dark_mode::apply(prefs.dark_mode);
        prefs.save();
    });

    view! {
        <Title text="lchaty"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RouteGuard><PortalPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <RouteGuard roles=vec![ADMIN_ROLE.to_owned()]><AdminPage/></RouteGuard> }
                />
            </Routes>
        </Router>
    }
}
