//! K-Beauty Hub auth: credential lookup, session management, access
//! evaluation and navigation filtering.

pub mod access;
pub mod config;
pub mod credentials;
pub mod error;
pub mod navigation;
pub mod service;
pub mod verifier;

pub use access::{can_access, ensure_access};
pub use config::AuthConfig;
pub use credentials::find_by_credentials;
pub use error::AuthError;
pub use navigation::{default_menu, visible_entries};
pub use service::SessionManager;
pub use verifier::{Argon2Verifier, CredentialVerifier, PlaintextVerifier};
