#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

/// Access-level tag used for exact-match route gating.
///
/// There is no hierarchy: an `Admin` session is not admitted onto a
/// `SuperAdmin`-only page, and vice versa.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Citizen,
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Citizen => "Citizen",
            Role::Admin => "Administrator",
            Role::SuperAdmin => "Super Administrator",
        }
    }
}

/// The authenticated principal: profile fields, role, and creation time.
///
/// Serialized as a whole into the storage adapter's single record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub role: Role,
    /// Epoch milliseconds.
    pub created_at: i64,
}

impl Identity {
    /// Shallow-merge the supplied fields into this identity.
    pub fn apply(&mut self, patch: IdentityPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
    }
}

/// Partial profile update applied via `SessionStore::update_identity`.
///
/// `None` fields are left untouched; `id`, `role`, and `created_at` are
/// never editable through this path.
#[derive(Clone, Debug, Default)]
pub struct IdentityPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Profile fields collected by the sign-up form.
#[derive(Clone, Debug, Default)]
pub struct SignupProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Whether a session is being restored, absent, or active.
///
/// `Loading` exists only between process start and the storage restore in
/// `SessionStore::initialize`; it is never re-entered afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Loading,
    Anonymous,
    Authenticated {
        identity: Identity,
        /// Epoch ms of the most recent recognized user interaction.
        last_active_at: i64,
    },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Authenticated { identity, .. } => Some(identity),
            SessionState::Loading | SessionState::Anonymous => None,
        }
    }
}

/// Authentication failures surfaced inline on the sign-in form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid identifier or password")]
    InvalidCredentials,
}

/// One-shot user-visible notices raised by forced session transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionNotice {
    /// The inactivity threshold elapsed and the session was ended.
    Expired,
}
