//! Permission, permission set and requirement models.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single grant held by an account.
///
/// `All` is a blanket grant that satisfies every requirement. It is a
/// distinct variant rather than a reserved string, so a specific
/// permission that happens to be named `"all"` grants nothing extra.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    All,
    Specific(String),
}

impl Permission {
    pub fn specific(name: impl Into<String>) -> Self {
        Permission::Specific(name.into())
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::All => f.write_str("*"),
            Permission::Specific(name) => f.write_str(name),
        }
    }
}

/// The set of permissions granted to an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding only the blanket grant.
    pub fn all() -> Self {
        std::iter::once(Permission::All).collect()
    }

    /// Build a set of specific permissions from their names.
    pub fn of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(Permission::specific).collect()
    }

    pub fn contains(&self, permission: &Permission) -> bool {
        self.0.contains(permission)
    }

    pub fn grants_all(&self) -> bool {
        self.0.contains(&Permission::All)
    }

    pub fn intersects<'a, I>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = &'a Permission>,
    {
        candidates.into_iter().any(|p| self.0.contains(p))
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

/// What a navigation entry or guarded view demands of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Exactly this permission must be held.
    Single(Permission),
    /// Any one of these permissions is enough. Order is kept for display
    /// only; it has no effect on evaluation.
    AnyOf(Vec<Permission>),
}

impl Requirement {
    pub fn single(name: impl Into<String>) -> Self {
        Requirement::Single(Permission::specific(name))
    }

    pub fn any_of<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Permission>,
    {
        Requirement::AnyOf(alternatives.into_iter().collect())
    }

    /// `{name, all}`: the shape used by every back-office section.
    pub fn section(name: impl Into<String>) -> Self {
        Requirement::AnyOf(vec![Permission::specific(name), Permission::All])
    }

    /// Whether a holder of `granted` meets this requirement.
    ///
    /// The blanket grant satisfies everything; otherwise a single
    /// requirement needs membership and a list needs any overlap.
    pub fn is_satisfied_by(&self, granted: &PermissionSet) -> bool {
        if granted.grants_all() {
            return true;
        }
        match self {
            Requirement::Single(permission) => granted.contains(permission),
            Requirement::AnyOf(alternatives) => granted.intersects(alternatives),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_satisfies_anything() {
        let granted = PermissionSet::all();
        assert!(Requirement::single("users").is_satisfied_by(&granted));
        assert!(Requirement::any_of([]).is_satisfied_by(&granted));
        assert!(Requirement::section("settings").is_satisfied_by(&granted));
    }

    #[test]
    fn any_of_needs_one_overlap() {
        let granted = PermissionSet::of(["products"]);
        assert!(Requirement::section("products").is_satisfied_by(&granted));
        assert!(!Requirement::section("users").is_satisfied_by(&granted));
    }

    #[test]
    fn single_requires_membership() {
        let granted = PermissionSet::of(["dashboard", "reports_view"]);
        assert!(Requirement::single("reports_view").is_satisfied_by(&granted));
        assert!(!Requirement::single("reports").is_satisfied_by(&granted));
    }

    #[test]
    fn specific_permission_named_all_is_not_blanket() {
        let granted = PermissionSet::of(["all"]);
        assert!(!granted.grants_all());
        assert!(!Requirement::single("users").is_satisfied_by(&granted));
    }

    #[test]
    fn empty_set_satisfies_nothing() {
        let granted = PermissionSet::new();
        assert!(!Requirement::section("dashboard").is_satisfied_by(&granted));
        assert!(!Requirement::any_of([]).is_satisfied_by(&granted));
    }

    #[test]
    fn blanket_serializes_distinctly() {
        let json = serde_json::to_string(&PermissionSet::all()).unwrap();
        assert_eq!(json, r#"["all"]"#);
        let json = serde_json::to_string(&Permission::specific("all")).unwrap();
        assert_eq!(json, r#"{"specific":"all"}"#);
    }
}
