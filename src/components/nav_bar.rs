//! Top navigation bar with session-aware links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::state::Role;
use crate::session::store::SessionStore;

/// Portal header: static links plus either a sign-in link or the signed-in
/// identity with a sign-out button.
#[component]
pub fn NavBar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let identity_store = store.clone();
    let identity = move || identity_store.state().identity().cloned();

    let role_store = store.clone();
    let show_admin = move || {
        role_store
            .state()
            .identity()
            .is_some_and(|i| matches!(i.role, Role::Admin | Role::SuperAdmin))
    };

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        store.logout();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">
                "Suvidha"
            </a>
            <nav class="nav-bar__links">
                <a href="/">"Services"</a>
                <a href="/dashboard">"Dashboard"</a>
                <a href="/account">"My Account"</a>
                <Show when=show_admin>
                    <a href="/admin">"Admin"</a>
                </Show>
            </nav>
            {move || match identity() {
                Some(identity) => view! {
                    <div class="nav-bar__session">
                        <span class="nav-bar__user">{identity.name.clone()}</span>
                        <button class="btn" on:click=on_sign_out.clone()>
                            "Sign out"
                        </button>
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="nav-bar__session">
                        <a class="btn btn--primary" href="/login">
                            "Sign in"
                        </a>
                    </div>
                }
                .into_any(),
            }}
        </header>
    }
}
