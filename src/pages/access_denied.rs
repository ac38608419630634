//! Access-denied page for signed-in visitors lacking the required role.
//! Distinct from the sign-in redirect: landing here means the session is
//! valid but the page wants a different access level.

use leptos::prelude::*;

#[component]
pub fn AccessDeniedPage() -> impl IntoView {
    view! {
        <div class="access-denied-page">
            <h1>"Access denied"</h1>
            <p>"Your account does not have permission to view that page."</p>
            <p>
                <a href="/">"Back to services"</a>
                " or "
                <a href="/dashboard">"go to your dashboard"</a>
            </p>
        </div>
    }
}
