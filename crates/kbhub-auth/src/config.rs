//! Authentication configuration.

use std::time::Duration;

/// Configuration for the session manager.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Key under which the session record is persisted. There is exactly
    /// one slot, so a second login replaces the first.
    pub session_key: String,
    /// Delay before the credential lookup resolves, standing in for a
    /// network round trip.
    pub login_latency: Duration,
    /// Upper bound on the whole awaited lookup. `None` waits forever.
    pub login_timeout: Option<Duration>,
    /// Optional pepper prepended to secrets before Argon2id verification.
    pub pepper: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_key: "kbhub_session".into(),
            login_latency: Duration::from_millis(500),
            login_timeout: None,
            pepper: None,
        }
    }
}
