//! Repository and store trait definitions.
//!
//! Account and directory lookups are async so a remote backend can
//! stand behind the same contract as the seeded in-process tables.
//! The key-value store is synchronous: it models a single local slot
//! owned by one session manager.

use crate::error::KbResult;
use crate::models::{
    account::Account,
    directory::DirectoryUser,
};

/// Read-only access to the account table.
pub trait AccountRepository: Send + Sync {
    fn get_by_id(&self, id: u64) -> impl Future<Output = KbResult<Account>> + Send;
    /// Exact, case-sensitive match on the login email.
    fn get_by_email(&self, email: &str) -> impl Future<Output = KbResult<Account>> + Send;
    fn list(&self) -> impl Future<Output = KbResult<Vec<Account>>> + Send;
}

pub trait DirectoryRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = KbResult<Vec<DirectoryUser>>> + Send;
}

/// A string-keyed, string-valued durable store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> KbResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> KbResult<()>;
    /// Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> KbResult<()>;
}
