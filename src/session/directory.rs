//! Credential directory: the seam where a real identity service would be
//! substituted.
//!
//! The portal ships with a hardcoded in-memory table and plaintext secrets.
//! Nothing outside this module depends on that; `SessionStore` only sees the
//! `lookup` contract.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use crate::session::state::{Identity, Role};

/// Lookup contract honored by any credential backend.
///
/// Matching is exact and case-sensitive on both fields; no normalization is
/// applied. `Send + Sync` so the store can live in view closures.
pub trait CredentialDirectory: Send + Sync {
    fn lookup(&self, identifier: &str, secret: &str) -> Option<Identity>;
}

struct DirectoryEntry {
    identifier: &'static str,
    secret: &'static str,
    identity: Identity,
}

/// Fixed table of demo accounts.
pub struct MockDirectory {
    entries: Vec<DirectoryEntry>,
}

fn seeded(id: &str, name: &str, email: &str, phone: &str, address: &str, role: Role) -> Identity {
    Identity {
        id: id.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        phone: phone.to_owned(),
        address: address.to_owned(),
        role,
        created_at: 1_735_689_600_000, // 2025-01-01T00:00:00Z
    }
}

impl Default for MockDirectory {
    fn default() -> Self {
        Self {
            entries: vec![
                DirectoryEntry {
                    identifier: "test@suvidha.gov.in",
                    secret: "test123",
                    identity: seeded(
                        "cit-0001",
                        "Test Citizen",
                        "test@suvidha.gov.in",
                        "9800000001",
                        "12 MG Road, Ward 4",
                        Role::Citizen,
                    ),
                },
                DirectoryEntry {
                    identifier: "admin@suvidha.gov.in",
                    secret: "admin123",
                    identity: seeded(
                        "adm-0001",
                        "Ward Administrator",
                        "admin@suvidha.gov.in",
                        "9800000002",
                        "Municipal Office, Sector 9",
                        Role::Admin,
                    ),
                },
                DirectoryEntry {
                    identifier: "super@suvidha.gov.in",
                    secret: "super123",
                    identity: seeded(
                        "sup-0001",
                        "Commissioner Office",
                        "super@suvidha.gov.in",
                        "9800000003",
                        "Municipal Office, Sector 9",
                        Role::SuperAdmin,
                    ),
                },
            ],
        }
    }
}

impl CredentialDirectory for MockDirectory {
    fn lookup(&self, identifier: &str, secret: &str) -> Option<Identity> {
        self.entries
            .iter()
            .find(|entry| entry.identifier == identifier && entry.secret == secret)
            .map(|entry| entry.identity.clone())
    }
}
