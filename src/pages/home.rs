//! Landing page with the browsable service catalogue.

use leptos::prelude::*;

use crate::components::service_card::ServiceCard;
use crate::data::services::SERVICES;

/// Public home page; no session required.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Suvidha Citizen Portal"</h1>
                <p>"Municipal services, bills, and records in one place."</p>
            </section>
            <section class="home-page__services">
                <h2>"Services"</h2>
                <div class="home-page__grid">
                    {SERVICES
                        .into_iter()
                        .map(|service| view! { <ServiceCard service=service/> })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
