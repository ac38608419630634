//! Inactivity watchdog for authenticated sessions.
//!
//! The timing rules live here as plain timestamp maths so they are testable
//! on the host; the browser half (event listeners and the poll loop) is
//! gated behind `hydrate`.
//!
//! A monitor handle belongs to exactly one authenticated session and is
//! never reused; a fresh sign-in starts a fresh one. The browser main
//! thread is the only thread, so the active handle is parked in a
//! thread-local slot rather than inside the (`Send + Sync`) store. Every
//! exit from the authenticated state (sign-out, expiry, unmount) must go
//! through [`stop`], which removes all listeners and ends the poll task.

#[cfg(test)]
#[path = "monitor_test.rs"]
mod monitor_test;

use crate::session::store::SessionStore;

/// Activity signals refresh `last_active_at` at most once per this window.
pub const ACTIVITY_COALESCE_MS: i64 = 1_000;

/// How often the poll task compares idle time against the threshold.
pub const IDLE_POLL_MS: u32 = 10_000;

/// Institutional policy: sessions end after 15 minutes without interaction.
pub const IDLE_TIMEOUT_MS: i64 = 15 * 60 * 1_000;

/// Interaction signals observed at document scope.
pub const ACTIVITY_EVENTS: [&str; 4] = ["pointerdown", "keydown", "scroll", "touchstart"];

/// Timestamp gate for the coalescing rule: a signal at `now_ms` refreshes
/// `last_active_at` only once the window has elapsed.
pub fn should_refresh(last_active_at: i64, now_ms: i64) -> bool {
    now_ms.saturating_sub(last_active_at) >= ACTIVITY_COALESCE_MS
}

/// Whether the idle threshold has elapsed since the last interaction.
pub fn is_expired(last_active_at: i64, now_ms: i64) -> bool {
    now_ms.saturating_sub(last_active_at) >= IDLE_TIMEOUT_MS
}

#[cfg(feature = "hydrate")]
thread_local! {
    static ACTIVE: std::cell::RefCell<Option<MonitorHandle>> =
        const { std::cell::RefCell::new(None) };
}

/// Start a watchdog for the session entering `authenticated`, replacing
/// (and stopping) any predecessor. No-op outside a browser.
pub fn start(store: SessionStore) {
    #[cfg(feature = "hydrate")]
    {
        let handle = MonitorHandle::start(store);
        ACTIVE.with(|slot| {
            if let Some(previous) = slot.replace(handle) {
                previous.stop();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = store;
    }
}

/// Stop and discard the active watchdog, if any. Idempotent.
pub fn stop() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(handle) = ACTIVE.with(|slot| slot.take()) {
            handle.stop();
        }
    }
}

/// Running watchdog for one authenticated session: document-level activity
/// listeners plus the periodic idle check.
#[cfg(feature = "hydrate")]
struct MonitorHandle {
    alive: std::rc::Rc<std::cell::Cell<bool>>,
    listeners: Vec<(
        &'static str,
        wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
    )>,
}

#[cfg(feature = "hydrate")]
impl MonitorHandle {
    /// Attach listeners and spawn the poll task. `None` outside a document.
    fn start(store: SessionStore) -> Option<Self> {
        use std::cell::Cell;
        use std::rc::Rc;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let document = web_sys::window()?.document()?;
        let alive = Rc::new(Cell::new(true));

        let mut listeners = Vec::with_capacity(ACTIVITY_EVENTS.len());
        for event in ACTIVITY_EVENTS {
            let store = store.clone();
            let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                store.record_activity(crate::util::time::now_ms());
            });
            if document
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
                .is_ok()
            {
                listeners.push((event, closure));
            }
        }

        let poll_alive = Rc::clone(&alive);
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(IDLE_POLL_MS).await;
                if !poll_alive.get() {
                    break;
                }
                if store.check_idle(crate::util::time::now_ms()) {
                    // Expiry already tore the session down; this task is done.
                    break;
                }
            }
        });

        Some(Self { alive, listeners })
    }

    /// Remove all listeners and end the poll task.
    fn stop(self) {
        use wasm_bindgen::JsCast;

        self.alive.set(false);
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            for (event, closure) in &self.listeners {
                let _ = document
                    .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            }
        }
    }
}
