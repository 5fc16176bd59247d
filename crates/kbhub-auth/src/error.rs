//! Authentication error types.

use kbhub_core::error::KbError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("login timed out")]
    LoginTimedOut,

    /// Raised while reading the persisted session back. Restore handles
    /// it by clearing the slot; callers never see it.
    #[error("malformed session record: {0}")]
    MalformedSessionRecord(String),

    #[error("cryptography error: {0}")]
    Crypto(String),

    #[error("store error: {0}")]
    Store(String),
}

impl From<KbError> for AuthError {
    fn from(err: KbError) -> Self {
        AuthError::Store(err.to_string())
    }
}

impl From<AuthError> for KbError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials
            | AuthError::LoginTimedOut
            | AuthError::MalformedSessionRecord(_) => KbError::AuthenticationFailed {
                reason: err.to_string(),
            },
            AuthError::Crypto(msg) => KbError::Crypto(msg),
            AuthError::Store(msg) => KbError::Storage(msg),
        }
    }
}
