//! Access evaluation.

use kbhub_core::error::{KbError, KbResult};
use kbhub_core::models::permission::Requirement;
use kbhub_core::models::session::Session;
use tracing::debug;

/// Decide whether `session` may see something guarded by `requirement`.
///
/// No session is always denied. Pure and cheap enough to call on every
/// render.
pub fn can_access(session: Option<&Session>, requirement: &Requirement) -> bool {
    let Some(session) = session else {
        return false;
    };
    let allowed = requirement.is_satisfied_by(&session.account.permissions);
    debug!(
        account_id = session.account.id,
        ?requirement,
        allowed,
        "Access evaluated"
    );
    allowed
}

/// Like [`can_access`] but for callers that want a denial as an error,
/// e.g. a command that cannot render an access-denied view.
pub fn ensure_access(
    session: Option<&Session>,
    requirement: &Requirement,
    what: &str,
) -> KbResult<()> {
    if can_access(session, requirement) {
        return Ok(());
    }
    let reason = match session {
        None => format!("sign in to access {what}"),
        Some(s) => format!("{} may not access {what}", s.account.email),
    };
    Err(KbError::AuthorizationDenied { reason })
}
