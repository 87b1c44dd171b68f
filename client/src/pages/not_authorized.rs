//! Shown in place of a protected page when the signed-in user lacks the
//! required role.

use leptos::prelude::*;
use session::guard::HOME_ROUTE;

#[component]
pub fn NotAuthorizedPage() -> impl IntoView {
    view! {
        <div class="not-authorized" role="alert">
            <h1>"Not authorized"</h1>
            <p>"Your account does not have access to this page."</p>
            <a class="not-authorized__link" href=HOME_ROUTE>"Back to the portal"</a>
        </div>
    }
}
