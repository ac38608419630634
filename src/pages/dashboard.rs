//! Billing dashboard for a signed-in citizen. Data is the static mock
//! table; a real portal would fetch it per identity.

use leptos::prelude::*;

use crate::data::billing::{self, BILLS};
use crate::session::store::SessionStore;

/// Protected dashboard page.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let greeting = move || {
        store
            .state()
            .identity()
            .map_or_else(String::new, |identity| format!("Welcome, {}", identity.name))
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
                <p class="dashboard-page__outstanding">
                    "Outstanding: " {billing::format_rupees(billing::outstanding_paise())}
                </p>
            </header>
            <table class="dashboard-page__bills">
                <thead>
                    <tr>
                        <th>"Bill"</th>
                        <th>"Service"</th>
                        <th>"Period"</th>
                        <th>"Amount"</th>
                        <th>"Due"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {BILLS
                        .into_iter()
                        .map(|bill| {
                            view! {
                                <tr>
                                    <td>{bill.id}</td>
                                    <td>{bill.service}</td>
                                    <td>{bill.period}</td>
                                    <td>{billing::format_rupees(bill.amount_paise)}</td>
                                    <td>{bill.due_date}</td>
                                    <td>{if bill.paid { "Paid" } else { "Due" }}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
