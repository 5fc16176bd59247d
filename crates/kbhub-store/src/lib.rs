//! K-Beauty Hub store: the seeded account table, key-value stores for
//! the persisted session slot, and mock directory data.
//!
//! This crate provides:
//! - The static credential table ([`StaticAccountRepository`])
//! - Session slot storage ([`MemoryStore`], [`FileStore`])
//! - The mock user directory ([`SeededDirectory`])
//! - Error types ([`StoreError`])

mod account;
mod directory;
mod error;
mod kv;

pub use account::{StaticAccountRepository, seed_accounts};
pub use directory::{SeededDirectory, seed_directory};
pub use error::StoreError;
pub use kv::{FileStore, MemoryStore};
