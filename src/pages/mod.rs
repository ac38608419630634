//! Routed pages. Protected pages are wrapped in `RequireAuth` by the
//! route table in `crate::app`, not here.

pub mod access_denied;
pub mod account;
pub mod admin;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod signup;
