//! In-process implementation of [`AccountRepository`].

use std::fs;
use std::path::Path;

use kbhub_core::error::KbResult;
use kbhub_core::models::account::{Account, Role};
use kbhub_core::models::permission::PermissionSet;
use kbhub_core::repository::AccountRepository;
use tracing::info;

use crate::error::StoreError;

/// The back-office accounts shipped with the mock deployment.
///
/// Credentials are plaintext; pair this table with a plaintext verifier
/// only.
pub fn seed_accounts() -> Vec<Account> {
    vec![
        Account {
            id: 1,
            email: "admin@kbeautyhub.com".into(),
            credential: "admin123".into(),
            display_name: "Admin User".into(),
            role: Role::Admin,
            permissions: PermissionSet::all(),
        },
        Account {
            id: 2,
            email: "editor@kbeautyhub.com".into(),
            credential: "editor123".into(),
            display_name: "Content Editor".into(),
            role: Role::Editor,
            permissions: PermissionSet::of(["dashboard", "products", "orders", "reports_view"]),
        },
        Account {
            id: 3,
            email: "viewer@kbeautyhub.com".into(),
            credential: "viewer123".into(),
            display_name: "Report Viewer".into(),
            role: Role::Viewer,
            permissions: PermissionSet::of(["dashboard", "reports_view"]),
        },
    ]
}

/// A fixed account table. Contents are set at construction and never
/// change for the life of the process.
pub struct StaticAccountRepository {
    accounts: Vec<Account>,
}

impl StaticAccountRepository {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    pub fn seeded() -> Self {
        Self::new(seed_accounts())
    }

    /// Load the table from a JSON array of accounts, credentials included.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let accounts: Vec<Account> = serde_json::from_str(&fs::read_to_string(path)?)?;
        info!(path = %path.display(), count = accounts.len(), "Account table loaded");
        Ok(Self::new(accounts))
    }

    fn find<P>(
        &self,
        entity_id: impl FnOnce() -> String,
        predicate: P,
    ) -> Result<Account, StoreError>
    where
        P: Fn(&Account) -> bool,
    {
        self.accounts
            .iter()
            .find(|a| predicate(a))
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity: "account".into(),
                id: entity_id(),
            })
    }
}

impl Default for StaticAccountRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

impl AccountRepository for StaticAccountRepository {
    async fn get_by_id(&self, id: u64) -> KbResult<Account> {
        Ok(self.find(|| id.to_string(), |a| a.id == id)?)
    }

    async fn get_by_email(&self, email: &str) -> KbResult<Account> {
        Ok(self.find(|| format!("email={email}"), |a| a.email == email)?)
    }

    async fn list(&self) -> KbResult<Vec<Account>> {
        Ok(self.accounts.clone())
    }
}
