//! Domain models for the back office.
//!
//! Accounts, permissions and sessions drive access control; the
//! directory and settings models back the user-management table and
//! the store settings form.

pub mod account;
pub mod directory;
pub mod navigation;
pub mod permission;
pub mod session;
pub mod settings;
