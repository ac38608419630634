//! Session lifecycle core: state machine, persistence, inactivity watchdog,
//! and the route-level access gate.
//!
//! DESIGN
//! ======
//! `SessionStore` is the single source of truth for [`state::SessionState`]
//! and the only writer to the storage adapter. It is provided via context so
//! pages and the router share one reactive view of the session. The
//! inactivity monitor belongs to exactly one authenticated session and is
//! discarded, never reused, when that session ends.
//!
//! Dependency order (leaves first): `storage` → `monitor` → `store` →
//! `guard` → router integration in `crate::app`.

pub mod directory;
pub mod guard;
pub mod monitor;
pub mod state;
pub mod storage;
pub mod store;
