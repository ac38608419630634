//! Route-level access gate.
//!
//! The decision itself is a pure function so it can be tested exhaustively;
//! [`RequireAuth`] binds it to the router: it renders protected children,
//! shows a holding view while the session restore is pending, and performs
//! the redirects, remembering the originally requested path on the
//! sign-in redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::session::state::{Role, SessionState};
use crate::session::store::SessionStore;

/// The authorization decision for one route render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session restore has not resolved; make no redirect decision yet.
    Pending,
    /// Render the requested page.
    Admit,
    /// Anonymous visitor: send to sign-in, remembering the destination.
    RedirectToSignIn,
    /// Signed in but the wrong role for this page. Distinct from the
    /// anonymous case and never conflated with it.
    RedirectToAccessDenied,
}

/// Pure gate decision. Total over every `(state, required_role)` pair;
/// role matching is exact, with no hierarchy.
pub fn decide(state: &SessionState, required_role: Option<Role>) -> GateDecision {
    match state {
        SessionState::Loading => GateDecision::Pending,
        SessionState::Anonymous => GateDecision::RedirectToSignIn,
        SessionState::Authenticated { identity, .. } => match required_role {
            Some(role) if identity.role != role => GateDecision::RedirectToAccessDenied,
            _ => GateDecision::Admit,
        },
    }
}

/// Router integration: wraps a protected page and applies [`decide`].
#[component]
pub fn RequireAuth(
    /// Exact role required by the wrapped page, if any.
    #[prop(optional, into)]
    required_role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let location = use_location();
    let navigate = use_navigate();

    let effect_store = store.clone();
    Effect::new(move || match decide(&effect_store.state(), required_role) {
        GateDecision::RedirectToSignIn => {
            effect_store.set_intended(location.pathname.get_untracked());
            navigate("/login", NavigateOptions::default());
        }
        GateDecision::RedirectToAccessDenied => {
            navigate("/access-denied", NavigateOptions::default());
        }
        GateDecision::Pending | GateDecision::Admit => {}
    });

    move || match decide(&store.state(), required_role) {
        GateDecision::Admit => children().into_any(),
        GateDecision::Pending => view! {
            <div class="gate-pending">
                <p>"Checking your session..."</p>
            </div>
        }
        .into_any(),
        // The effect above is navigating; render nothing in the meantime.
        GateDecision::RedirectToSignIn | GateDecision::RedirectToAccessDenied => ().into_any(),
    }
}
