//! Session manager: login, restore and logout orchestration.

use chrono::Utc;
use kbhub_core::models::account::Account;
use kbhub_core::models::navigation::NavEntry;
use kbhub_core::models::permission::Requirement;
use kbhub_core::models::session::{Session, SessionRecord};
use kbhub_core::repository::{AccountRepository, KeyValueStore};
use tracing::{info, warn};

use crate::access;
use crate::config::AuthConfig;
use crate::credentials;
use crate::error::AuthError;
use crate::navigation;
use crate::verifier::CredentialVerifier;

/// Sole owner of the current session and of its persisted slot.
///
/// Generic over the account repository, credential verifier and
/// key-value store so that the presentation layer can swap any of them
/// without touching access evaluation.
pub struct SessionManager<A, V, S>
where
    A: AccountRepository,
    V: CredentialVerifier,
    S: KeyValueStore,
{
    accounts: A,
    verifier: V,
    store: S,
    config: AuthConfig,
    current: Option<Session>,
}

impl<A, V, S> SessionManager<A, V, S>
where
    A: AccountRepository,
    V: CredentialVerifier,
    S: KeyValueStore,
{
    pub fn new(accounts: A, verifier: V, store: S, config: AuthConfig) -> Self {
        Self {
            accounts,
            verifier,
            store,
            config,
            current: None,
        }
    }

    /// Authenticate with email + secret and persist a new session.
    ///
    /// Takes `&mut self`, so a second attempt cannot start while one is
    /// pending. On failure any existing session is left untouched.
    pub async fn login(&mut self, email: &str, secret: &str) -> Result<Account, AuthError> {
        let lookup = async {
            if !self.config.login_latency.is_zero() {
                tokio::time::sleep(self.config.login_latency).await;
            }
            credentials::find_by_credentials(&self.accounts, &self.verifier, email, secret).await
        };

        let found = match self.config.login_timeout {
            Some(limit) => tokio::time::timeout(limit, lookup)
                .await
                .map_err(|_| AuthError::LoginTimedOut)??,
            None => lookup.await?,
        };

        let Some(account) = found else {
            warn!(email = %email, "Login rejected: invalid credentials");
            return Err(AuthError::InvalidCredentials);
        };

        let session = Session {
            account,
            issued_at: Utc::now(),
        };
        let raw = session.record().to_json()?;
        self.store.set(&self.config.session_key, &raw)?;

        info!(
            account_id = session.account.id,
            role = %session.account.role,
            "Login succeeded"
        );
        let account = session.account.clone();
        self.current = Some(session);
        Ok(account)
    }

    /// Re-establish the session persisted by an earlier login.
    ///
    /// Anything short of a parseable record pointing at a known account
    /// clears the slot and yields `None`. Never fails.
    pub async fn restore(&mut self) -> Option<Account> {
        let record = match self.read_record() {
            Ok(Some(record)) => record,
            Ok(None) => {
                self.current = None;
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Discarding persisted session");
                self.clear();
                return None;
            }
        };

        match self.accounts.get_by_id(record.account_id).await {
            Ok(account) => {
                info!(account_id = account.id, "Session restored");
                self.current = Some(Session {
                    account: account.clone(),
                    issued_at: record.issued_at,
                });
                Some(account)
            }
            Err(e) => {
                warn!(
                    account_id = record.account_id,
                    error = %e,
                    "Persisted session references an unknown account"
                );
                self.clear();
                None
            }
        }
    }

    /// End the current session. Calling it with no session is a no-op.
    pub fn logout(&mut self) {
        if let Some(session) = &self.current {
            info!(account_id = session.account.id, "Logged out");
        }
        self.clear();
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn can_access(&self, requirement: &Requirement) -> bool {
        access::can_access(self.current(), requirement)
    }

    pub fn visible_entries<'a>(&'a self, entries: &'a [NavEntry]) -> Vec<&'a NavEntry> {
        navigation::visible_entries(entries, self.current()).collect()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn read_record(&self) -> Result<Option<SessionRecord>, AuthError> {
        let raw = self
            .store
            .get(&self.config.session_key)
            .map_err(|e| AuthError::MalformedSessionRecord(e.to_string()))?;
        raw.map(|raw| {
            SessionRecord::from_json(&raw)
                .map_err(|e| AuthError::MalformedSessionRecord(e.to_string()))
        })
        .transpose()
    }

    fn clear(&mut self) {
        self.current = None;
        if let Err(e) = self.store.remove(&self.config.session_key) {
            warn!(key = %self.config.session_key, error = %e, "Failed to clear persisted session");
        }
    }
}
