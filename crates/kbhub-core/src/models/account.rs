//! Account domain model.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::permission::PermissionSet;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
    /// Storefront customer. Listed in the user directory, never a
    /// back-office login role.
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
            Role::Customer => "customer",
        }
    }

    pub fn can_sign_in(&self) -> bool {
        !matches!(self, Role::Customer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "editor" => Ok(Role::Editor),
            "viewer" => Ok(Role::Viewer),
            "customer" => Ok(Role::Customer),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// A back-office account.
///
/// `credential` holds whatever the configured verifier understands:
/// a plaintext secret for the seeded table or an Argon2id PHC hash.
/// It is never serialized and never shown by `Debug`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: u64,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub credential: String,
    pub display_name: String,
    pub role: Role,
    pub permissions: PermissionSet,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("credential", &"<redacted>")
            .field("display_name", &self.display_name)
            .field("role", &self.role)
            .field("permissions", &self.permissions)
            .finish()
    }
}
