//! Root application component: context provision, routing, and the
//! access-gated route table.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::session_notice::SessionNoticeDialog;
use crate::pages::{
    access_denied::AccessDeniedPage,
    account::AccountPage,
    admin::{AdminPage, SystemPage},
    dashboard::DashboardPage,
    home::HomePage,
    login::LoginPage,
    signup::SignupPage,
};
use crate::session::directory::MockDirectory;
use crate::session::guard::RequireAuth;
use crate::session::state::Role;
use crate::session::storage::BrowserStorage;
use crate::session::store::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session store over browser storage and the mock directory,
/// provides it via context, and wires every protected path through
/// [`RequireAuth`]. Unprotected pages bypass the gate entirely.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new(
        Arc::new(BrowserStorage),
        Arc::new(MockDirectory::default()),
    );
    provide_context(store.clone());

    // Restore the persisted session once the client is live. Until this
    // resolves, the gate holds protected routes in its pending view.
    let init_store = store.clone();
    Effect::new(move || init_store.initialize());

    // Unmount is an exit edge too: the watchdog must not outlive the app.
    let cleanup_store = store.clone();
    on_cleanup(move || cleanup_store.stop_monitor());

    view! {
        <Stylesheet id="leptos" href="/pkg/suvidha-portal.css"/>
        <Title text="Suvidha Citizen Portal"/>

        <Router>
            <NavBar/>
            <SessionNoticeDialog/>
            <main class="portal-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("access-denied") view=AccessDeniedPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! {
                            <RequireAuth>
                                <DashboardPage/>
                            </RequireAuth>
                        }
                    />
                    <Route
                        path=StaticSegment("account")
                        view=|| view! {
                            <RequireAuth>
                                <AccountPage/>
                            </RequireAuth>
                        }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! {
                            <RequireAuth required_role=Role::Admin>
                                <AdminPage/>
                            </RequireAuth>
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("system"))
                        view=|| view! {
                            <RequireAuth required_role=Role::SuperAdmin>
                                <SystemPage/>
                            </RequireAuth>
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
