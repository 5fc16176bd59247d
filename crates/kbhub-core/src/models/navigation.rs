//! Navigation entry model.

use serde::{Deserialize, Serialize};

use super::permission::Requirement;

/// One item of the back-office side menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
    pub path: String,
    pub requirement: Requirement,
}

impl NavEntry {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        path: impl Into<String>,
        requirement: Requirement,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: path.into(),
            requirement,
        }
    }
}
