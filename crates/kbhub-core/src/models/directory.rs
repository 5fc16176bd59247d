//! User directory model backing the user-management table.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::account::Role;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            "suspended" => Ok(UserStatus::Suspended),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub joined_at: NaiveDate,
}

/// The three independent table filters. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Case-insensitive substring of the name or email.
    pub search: Option<String>,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
}

impl UserFilter {
    pub fn matches(&self, user: &DirectoryUser) -> bool {
        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                user.name.to_lowercase().contains(&term)
                    || user.email.to_lowercase().contains(&term)
            }
        };
        search_ok
            && self.role.is_none_or(|r| r == user.role)
            && self.status.is_none_or(|s| s == user.status)
    }

    /// Keep the users that match, in their original order.
    pub fn apply<'a>(&self, users: &'a [DirectoryUser]) -> Vec<&'a DirectoryUser> {
        users.iter().filter(|u| self.matches(u)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, name: &str, role: Role, status: UserStatus) -> DirectoryUser {
        DirectoryUser {
            id,
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            role,
            status,
            joined_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    fn sample() -> Vec<DirectoryUser> {
        vec![
            user(1, "Kim Minji", Role::Customer, UserStatus::Active),
            user(2, "Lee Jiwoo", Role::Editor, UserStatus::Active),
            user(3, "Park Seoyeon", Role::Customer, UserStatus::Suspended),
            user(4, "Choi Minho", Role::Viewer, UserStatus::Inactive),
        ]
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let users = sample();
        assert_eq!(UserFilter::default().apply(&users).len(), 4);
    }

    #[test]
    fn search_is_case_insensitive_on_name_and_email() {
        let users = sample();
        let filter = UserFilter {
            search: Some("MIN".into()),
            ..Default::default()
        };
        let ids: Vec<u64> = filter.apply(&users).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 4]);

        let filter = UserFilter {
            search: Some("seoyeon@".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&users).len(), 1);
    }

    #[test]
    fn blank_search_is_ignored() {
        let users = sample();
        let filter = UserFilter {
            search: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&users).len(), 4);
    }

    #[test]
    fn filters_combine_conjunctively() {
        let users = sample();
        let filter = UserFilter {
            search: None,
            role: Some(Role::Customer),
            status: Some(UserStatus::Active),
        };
        let ids: Vec<u64> = filter.apply(&users).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
