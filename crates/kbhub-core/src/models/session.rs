//! Session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::Account;
use crate::error::KbResult;

/// The persisted form of a session: a weak reference to an account,
/// resolved by lookup whenever it is read back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub account_id: u64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub issued_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(account_id: u64, issued_at: DateTime<Utc>) -> Self {
        Self {
            account_id,
            issued_at,
        }
    }

    pub fn to_json(&self) -> KbResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> KbResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// An established session: the resolved account plus when it was issued.
#[derive(Debug, Clone)]
pub struct Session {
    pub account: Account,
    pub issued_at: DateTime<Utc>,
}

impl Session {
    pub fn record(&self) -> SessionRecord {
        SessionRecord::new(self.account.id, self.issued_at)
    }
}
