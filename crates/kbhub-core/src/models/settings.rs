//! Store settings model behind the settings form.
//!
//! Settings are process-local and reset on restart.

use serde::{Deserialize, Serialize};

use crate::error::{KbError, KbResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationSettings {
    pub order_emails: bool,
    pub low_stock_alerts: bool,
    pub weekly_report: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            order_emails: true,
            low_stock_alerts: true,
            weekly_report: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreSettings {
    pub store_name: String,
    pub contact_email: String,
    pub currency: String,
    pub timezone: String,
    pub notifications: NotificationSettings,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            store_name: "K-Beauty Hub".into(),
            contact_email: "support@kbeautyhub.com".into(),
            currency: "USD".into(),
            timezone: "Asia/Seoul".into(),
            notifications: NotificationSettings::default(),
        }
    }
}

/// A partial edit. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSettings {
    pub store_name: Option<String>,
    pub contact_email: Option<String>,
    pub currency: Option<String>,
    pub timezone: Option<String>,
    pub order_emails: Option<bool>,
    pub low_stock_alerts: Option<bool>,
    pub weekly_report: Option<bool>,
}

impl StoreSettings {
    /// Apply `update` atomically: on a validation error nothing changes.
    pub fn apply(&mut self, update: UpdateSettings) -> KbResult<()> {
        let mut next = self.clone();
        if let Some(v) = update.store_name {
            next.store_name = v;
        }
        if let Some(v) = update.contact_email {
            next.contact_email = v;
        }
        if let Some(v) = update.currency {
            next.currency = v;
        }
        if let Some(v) = update.timezone {
            next.timezone = v;
        }
        if let Some(v) = update.order_emails {
            next.notifications.order_emails = v;
        }
        if let Some(v) = update.low_stock_alerts {
            next.notifications.low_stock_alerts = v;
        }
        if let Some(v) = update.weekly_report {
            next.notifications.weekly_report = v;
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    pub fn validate(&self) -> KbResult<()> {
        if self.store_name.trim().is_empty() {
            return Err(KbError::validation("store name must not be empty"));
        }
        if !self.contact_email.contains('@') {
            return Err(KbError::validation(format!(
                "invalid contact email: {}",
                self.contact_email
            )));
        }
        Ok(())
    }
}
