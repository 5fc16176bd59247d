//! Navigation filtering.

use kbhub_core::models::navigation::NavEntry;
use kbhub_core::models::permission::Requirement;
use kbhub_core::models::session::Session;

use crate::access::can_access;

/// The back-office side menu, in display order.
pub fn default_menu() -> Vec<NavEntry> {
    [
        ("dashboard", "Dashboard", "/dashboard"),
        ("products", "Products", "/products"),
        ("orders", "Orders", "/orders"),
        ("customers", "Customers", "/customers"),
        ("users", "Users", "/users"),
        ("reports", "Reports", "/reports"),
        ("settings", "Settings", "/settings"),
    ]
    .into_iter()
    .map(|(id, label, path)| NavEntry::new(id, label, path, Requirement::section(id)))
    .collect()
}

/// The entries `session` may see, lazily, in their original order.
pub fn visible_entries<'a>(
    entries: &'a [NavEntry],
    session: Option<&'a Session>,
) -> impl Iterator<Item = &'a NavEntry> + Clone + 'a {
    entries
        .iter()
        .filter(move |entry| can_access(session, &entry.requirement))
}
