//! Header menu with the signed-in identity, theme toggle, and sign-out.

use leptos::prelude::*;

use crate::state::auth::use_auth;
use crate::state::ui::UiState;

#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;
    let ui = expect_context::<RwSignal<UiState>>();

    let name = move || {
        state
            .get()
            .user
            .map(|user| user.display_name().to_owned())
            .unwrap_or_default()
    };
    let on_toggle_theme = move |_| ui.update(UiState::toggle_dark_mode);
    let on_logout = move |_| auth.spawn_logout();

    view! {
        <div class="user-menu">
            <span class="user-menu__name">{name}</span>
            <button class="user-menu__button" type="button" on:click=on_toggle_theme>
                {move || if ui.get().dark_mode { "Light mode" } else { "Dark mode" }}
            </button>
            <button
                class="user-menu__button user-menu__button--logout"
                type="button"
                disabled=move || state.get().loading
                on:click=on_logout
            >
                "Sign out"
            </button>
        </div>
    }
}
