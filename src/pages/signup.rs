//! Sign-up page. A successful submission signs the new citizen in
//! immediately; there is no verification step in the mock portal.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::state::SignupProfile;
use crate::session::store::SessionStore;

/// Account creation form. Every new account gets the `Citizen` role.
#[component]
pub fn SignupPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if pending.get_untracked() {
            return;
        }
        let profile = SignupProfile {
            name: name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            phone: phone.get_untracked().trim().to_owned(),
            address: address.get_untracked().trim().to_owned(),
        };
        if profile.name.is_empty() || profile.email.is_empty() {
            error.set(Some("Name and email are required.".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match store.signup(profile).await {
                    Ok(_) => navigate("/dashboard", NavigateOptions::default()),
                    Err(err) => error.set(Some(err.to_string())),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&store, &navigate, profile);
        }
    });

    let field = |label: &'static str,
                 input_type: &'static str,
                 value: RwSignal<String>| {
        view! {
            <label class="form__label">
                {label}
                <input
                    class="form__input"
                    type=input_type
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="signup-page">
            <h1>"Create your account"</h1>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            {field("Full name", "text", name)}
            {field("Email", "email", email)}
            {field("Phone", "tel", phone)}
            {field("Address", "text", address)}
            <button
                class="btn btn--primary"
                disabled=move || pending.get()
                on:click=move |_| submit.run(())
            >
                {move || if pending.get() { "Creating..." } else { "Create account" }}
            </button>
            <p class="signup-page__login">
                "Already registered? " <a href="/login">"Sign in"</a>
            </p>
        </div>
    }
}
