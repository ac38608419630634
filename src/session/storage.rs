//! Storage adapter for the persisted session record.
//!
//! A single key in `window.sessionStorage` holds the serialized [`Identity`],
//! so a session survives page reloads but not the end of the browsing
//! context. Absence or an unreadable record is never surfaced to the user;
//! callers treat either as an anonymous session and purge the key.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::Mutex;

use crate::session::state::Identity;

/// Storage key for the serialized identity record.
pub const STORAGE_KEY: &str = "suvidha.session.identity";

/// Key-value persistence scoped to the browsing session.
///
/// `SessionStore` is the only writer; no other component may put identity
/// records here. `Send + Sync` so the store can live in view closures.
pub trait IdentityStorage: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, record: &str);
    fn clear(&self);
}

/// Serialize an identity for the storage record.
pub fn encode_identity(identity: &Identity) -> Option<String> {
    serde_json::to_string(identity).ok()
}

/// Parse a storage record. `None` for any malformed input.
pub fn decode_identity(record: &str) -> Option<Identity> {
    serde_json::from_str(record).ok()
}

/// `sessionStorage`-backed adapter. Outside a browser every operation is a
/// no-op and `load` yields `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

impl IdentityStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            session_storage()?.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, record: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.set_item(STORAGE_KEY, record);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = record;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

/// In-memory adapter for unit tests and server rendering.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    record: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn with_record(record: &str) -> Self {
        Self {
            record: Mutex::new(Some(record.to_owned())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // Single-threaded usage; a poisoned lock means a test already failed.
        self.record.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl IdentityStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.slot().clone()
    }

    fn save(&self, record: &str) {
        *self.slot() = Some(record.to_owned());
    }

    fn clear(&self) {
        *self.slot() = None;
    }
}
