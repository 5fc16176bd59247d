//! Credential store lookup.

use kbhub_core::error::KbError;
use kbhub_core::models::account::Account;
use kbhub_core::repository::AccountRepository;

use crate::error::AuthError;
use crate::verifier::CredentialVerifier;

/// Find the account whose email and secret both match exactly.
///
/// Unknown emails, wrong secrets and non-login roles all yield `None`;
/// only a broken repository or an uninterpretable stored credential is
/// an error.
pub async fn find_by_credentials<A, V>(
    accounts: &A,
    verifier: &V,
    email: &str,
    secret: &str,
) -> Result<Option<Account>, AuthError>
where
    A: AccountRepository,
    V: CredentialVerifier + ?Sized,
{
    let account = match accounts.get_by_email(email).await {
        Ok(account) => account,
        Err(KbError::NotFound { .. }) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    if !verifier.verify(secret, &account.credential)? {
        return Ok(None);
    }

    if !account.role.can_sign_in() {
        return Ok(None);
    }

    Ok(Some(account))
}
