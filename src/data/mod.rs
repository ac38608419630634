//! Static mock data backing the presentational pages.
//!
//! Stands in for the municipal back-office systems the portal would talk
//! to; nothing here is consulted by the session core.

pub mod billing;
pub mod services;
