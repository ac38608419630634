//! Administrative pages. Route protection is declared in `crate::app`:
//! `/admin` requires exactly `Role::Admin` and `/admin/system` exactly
//! `Role::SuperAdmin`; neither admits the other.

use leptos::prelude::*;

/// Ward-level administration overview (mock counts).
#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <h1>"Ward Administration"</h1>
            <div class="admin-page__stats">
                <div class="admin-page__stat">
                    <span class="admin-page__stat-value">"42"</span>
                    <span class="admin-page__stat-label">"Open complaints"</span>
                </div>
                <div class="admin-page__stat">
                    <span class="admin-page__stat-value">"311"</span>
                    <span class="admin-page__stat-label">"Applications this month"</span>
                </div>
                <div class="admin-page__stat">
                    <span class="admin-page__stat-value">"97%"</span>
                    <span class="admin-page__stat-label">"Bills collected"</span>
                </div>
            </div>
            <p>
                "System configuration lives at "
                <a href="/admin/system">"/admin/system"</a>
                " and needs super-administrator access."
            </p>
        </div>
    }
}

/// System configuration (mock), super-administrator only.
#[component]
pub fn SystemPage() -> impl IntoView {
    view! {
        <div class="system-page">
            <h1>"System Configuration"</h1>
            <ul class="system-page__settings">
                <li>"Session inactivity timeout: 15 minutes"</li>
                <li>"Billing cycle: monthly"</li>
                <li>"Service catalogue: 6 services published"</li>
            </ul>
        </div>
    }
}
