//! Account page: view the signed-in identity and edit profile fields.

use leptos::prelude::*;

use crate::session::state::IdentityPatch;
use crate::session::store::SessionStore;

/// Protected profile page; saving goes through `update_identity`, which
/// also refreshes the activity timestamp.
#[component]
pub fn AccountPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let current = store.state_untracked().identity().cloned();

    let name = RwSignal::new(current.as_ref().map(|i| i.name.clone()).unwrap_or_default());
    let email = RwSignal::new(current.as_ref().map(|i| i.email.clone()).unwrap_or_default());
    let phone = RwSignal::new(current.as_ref().map(|i| i.phone.clone()).unwrap_or_default());
    let address = RwSignal::new(
        current.as_ref().map(|i| i.address.clone()).unwrap_or_default(),
    );
    let role_label = current.as_ref().map(|i| i.role.label()).unwrap_or_default();
    let saved = RwSignal::new(false);

    let on_save = move |_: leptos::ev::MouseEvent| {
        store.update_identity(IdentityPatch {
            name: Some(name.get_untracked()),
            email: Some(email.get_untracked()),
            phone: Some(phone.get_untracked()),
            address: Some(address.get_untracked()),
        });
        saved.set(true);
    };

    let field = |label: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form__label">
                {label}
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        saved.set(false);
                        value.set(event_target_value(&ev));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="account-page">
            <h1>"My Account"</h1>
            <p class="account-page__role">"Access level: " {role_label}</p>
            {field("Full name", name)}
            {field("Email", email)}
            {field("Phone", phone)}
            {field("Address", address)}
            <button class="btn btn--primary" on:click=on_save>
                "Save changes"
            </button>
            <Show when=move || saved.get()>
                <p class="account-page__saved">"Profile updated."</p>
            </Show>
        </div>
    }
}
