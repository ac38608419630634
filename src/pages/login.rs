//! Sign-in page with the mock credential form.
//!
//! On success the page consumes the one-shot intended destination recorded
//! by the access gate, so a visitor bounced off `/account` lands back on
//! `/account` rather than the default dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::store::SessionStore;

/// Sign-in page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let identifier = RwSignal::new(String::new());
    let secret = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if pending.get_untracked() {
            return;
        }
        let id = identifier.get_untracked();
        let pw = secret.get_untracked();
        if id.trim().is_empty() || pw.is_empty() {
            error.set(Some("Enter your email and password.".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match store.login(&id, &pw).await {
                    Ok(_) => {
                        let destination = store
                            .take_intended()
                            .unwrap_or_else(|| "/dashboard".to_owned());
                        navigate(&destination, NavigateOptions::default());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&store, &navigate, id, pw);
        }
    });

    view! {
        <div class="login-page">
            <h1>"Sign in to Suvidha"</h1>
            <p class="login-page__hint">"Demo account: test@suvidha.gov.in / test123"</p>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <label class="form__label">
                "Email"
                <input
                    class="form__input"
                    type="email"
                    prop:value=move || identifier.get()
                    on:input=move |ev| identifier.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Password"
                <input
                    class="form__input"
                    type="password"
                    prop:value=move || secret.get()
                    on:input=move |ev| secret.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>
            <button
                class="btn btn--primary"
                disabled=move || pending.get()
                on:click=move |_| submit.run(())
            >
                {move || if pending.get() { "Signing in..." } else { "Sign in" }}
            </button>
            <p class="login-page__signup">
                "New to Suvidha? " <a href="/signup">"Create an account"</a>
            </p>
        </div>
    }
}
