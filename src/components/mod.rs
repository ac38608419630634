//! Shared UI components.

pub mod nav_bar;
pub mod service_card;
pub mod session_notice;
