//! Credential verification.
//!
//! The session manager only asks "does this secret match the stored
//! credential?". What the stored credential looks like is the
//! verifier's business.

use argon2::{Argon2, PasswordVerifier};

use crate::config::AuthConfig;
use crate::error::AuthError;

pub trait CredentialVerifier: Send + Sync {
    /// Returns `Ok(true)` on match, `Ok(false)` on mismatch, or an
    /// error when the stored credential cannot be interpreted.
    fn verify(&self, secret: &str, stored: &str) -> Result<bool, AuthError>;
}

impl<T: CredentialVerifier + ?Sized> CredentialVerifier for Box<T> {
    fn verify(&self, secret: &str, stored: &str) -> Result<bool, AuthError> {
        (**self).verify(secret, stored)
    }
}

/// Exact comparison against a plaintext stored credential.
///
/// Only fit for the seeded mock table.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextVerifier;

impl CredentialVerifier for PlaintextVerifier {
    fn verify(&self, secret: &str, stored: &str) -> Result<bool, AuthError> {
        Ok(secret == stored)
    }
}

/// Verification against an Argon2id PHC-format hash.
///
/// If a pepper is set it is prepended to the secret before
/// verification; it must match the pepper used during hashing.
#[derive(Debug, Default, Clone)]
pub struct Argon2Verifier {
    pepper: Option<String>,
}

impl Argon2Verifier {
    pub fn new(pepper: Option<String>) -> Self {
        Self { pepper }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.pepper.clone())
    }
}

impl CredentialVerifier for Argon2Verifier {
    fn verify(&self, secret: &str, stored: &str) -> Result<bool, AuthError> {
        let peppered: String;
        let input = match self.pepper.as_deref() {
            Some(p) => {
                peppered = format!("{p}{secret}");
                peppered.as_bytes()
            }
            None => secret.as_bytes(),
        };

        let parsed_hash = argon2::PasswordHash::new(stored)
            .map_err(|e| AuthError::Crypto(format!("invalid hash format: {e}")))?;

        match Argon2::default().verify_password(input, &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::Crypto(format!("verify error: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::PasswordHasher;
    use argon2::password_hash::SaltString;

    fn hash(secret: &str) -> String {
        let salt = SaltString::from_b64("a2JodWJ0ZXN0c2FsdA").expect("valid salt");
        Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .expect("hashing failed")
            .to_string()
    }

    #[test]
    fn plaintext_is_exact() {
        let v = PlaintextVerifier;
        assert!(v.verify("admin123", "admin123").unwrap());
        assert!(!v.verify("Admin123", "admin123").unwrap());
        assert!(!v.verify("", "admin123").unwrap());
    }

    #[test]
    fn argon2_correct_secret_matches() {
        let stored = hash("admin123");
        assert!(Argon2Verifier::default().verify("admin123", &stored).unwrap());
    }

    #[test]
    fn argon2_wrong_secret_does_not_match() {
        let stored = hash("admin123");
        assert!(!Argon2Verifier::default().verify("admin124", &stored).unwrap());
    }

    #[test]
    fn argon2_pepper_is_applied() {
        let stored = hash("pepper!admin123");
        let peppered = Argon2Verifier::from_config(&AuthConfig {
            pepper: Some("pepper!".into()),
            ..Default::default()
        });
        assert!(peppered.verify("admin123", &stored).unwrap());
        assert!(!Argon2Verifier::default().verify("admin123", &stored).unwrap());
    }

    #[test]
    fn argon2_rejects_plaintext_stored_value() {
        let err = Argon2Verifier::default()
            .verify("admin123", "admin123")
            .unwrap_err();
        assert!(matches!(err, AuthError::Crypto(_)));
    }
}
