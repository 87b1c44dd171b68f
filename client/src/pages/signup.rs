//! Account creation page. A successful signup signs the user straight in.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::AuthError;
use session::guard::HOME_ROUTE;

use crate::state::auth::use_auth;

const MISSING_FIELDS: &str = "Choose a username and password.";
const PASSWORD_MISMATCH: &str = "Passwords do not match.";
const INVALID_EMAIL: &str = "Enter a valid email or leave it blank.";

#[derive(Clone, Debug, PartialEq, Eq)]
struct SignupInput {
    username: String,
    password: String,
    email: Option<String>,
}

fn validate_signup_input(
    username: &str,
    password: &str,
    confirm: &str,
    email: &str,
) -> Result<SignupInput, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    let email = email.trim();
    let email = if email.is_empty() {
        None
    } else if is_plausible_email(email) {
        Some(email.to_owned())
    } else {
        return Err(INVALID_EMAIL);
    };
    Ok(SignupInput {
        username: username.to_owned(),
        password: password.to_owned(),
        email,
    })
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

/// Inline message for a finished signup attempt. Classified failures are
/// already in the auth state; only the ones that never reach it show here.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn submit_feedback(result: &Result<(), AuthError>) -> Option<String> {
    match result {
        Ok(()) | Err(AuthError::Failed(_)) => None,
        Err(error) => Some(error.message()),
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    Effect::new(move || {
        if state.get().is_authenticated() {
            navigate(HOME_ROUTE, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked().loading {
            return;
        }
        let input = match validate_signup_input(
            &username.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
            &email.get_untracked(),
        ) {
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
                let result = store
                    .signup(&input.username, &input.password, input.email.as_deref())
                    .await;
                if let Some(message) = submit_feedback(&result) {
                    info.set(message);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&auth, input);
        }
    };

    let message = move || {
        let local = info.get();
        if local.is_empty() { state.get().error } else { Some(local) }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create your account"</h1>
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
                        type="email"
                        autocomplete="email"
                        placeholder="Email (optional)"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || state.get().loading>
                        "Sign up"
                    </button>
                </form>
                <Show when=move || message().is_some()>
                    <p class="login-message" role="alert">{move || message().unwrap_or_default()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
