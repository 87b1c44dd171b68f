//! Login page: username + password against the session cookie backend.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};
use session::guard::NEXT_PARAM;
use session::post_login_target;

use crate::state::auth::use_auth;

const MISSING_FIELDS: &str = "Enter both username and password.";

/// Trimmed username and untouched password, or the inline message to show.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;
    let query = use_query_map();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    // Signed in (already, or just now): go back where the guard sent us from.
    Effect::new(move || {
        if state.get().is_authenticated() {
            let target = query.with_untracked(|q| post_login_target(q.get(NEXT_PARAM).as_deref()));
            navigate(&target, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked().loading {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(input) => input,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());

        #[cfg(feature = "csr")]
        {
            let store = auth.store().clone();
            leptos::task::spawn_local(async move {
                if store.login(&user, &pass).await.is_err() {
                    password.set(String::new());
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&auth, user, pass);
        }
    };

    let message = move || {
        let local = info.get();
        if local.is_empty() { state.get().error } else { Some(local) }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"lchaty"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || state.get().loading>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || message().is_some()>
                    <p class="login-message" role="alert">{move || message().unwrap_or_default()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "No account yet? "
                    <a href="/signup">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
