//! Card component for a single service on the home page.

use leptos::prelude::*;

use crate::data::services::ServiceInfo;

/// A service entry in the home-page catalogue grid.
#[component]
pub fn ServiceCard(service: ServiceInfo) -> impl IntoView {
    view! {
        <div class="service-card">
            <span class="service-card__category">{service.category}</span>
            <h3 class="service-card__name">{service.name}</h3>
            <p class="service-card__description">{service.description}</p>
        </div>
    }
}
