//! Blocking dialog shown once when a session expires from inactivity.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::store::SessionStore;

/// Renders the one-shot expiry notice; dismissing it clears the notice and
/// leads to the sign-in page.
#[component]
pub fn SessionNoticeDialog() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let when_store = store.clone();

    let on_dismiss = move |_: leptos::ev::MouseEvent| {
        store.dismiss_notice();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <Show when=move || when_store.notice().is_some()>
            <div class="dialog-backdrop">
                <div class="dialog">
                    <h2>"Session expired"</h2>
                    <p>
                        "You were signed out after 15 minutes of inactivity. "
                        "Please sign in again to continue."
                    </p>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=on_dismiss.clone()>
                            "Sign in"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
