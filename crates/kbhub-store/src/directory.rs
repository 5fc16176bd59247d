//! Mock user directory for the user-management table.

use chrono::NaiveDate;
use kbhub_core::error::{KbError, KbResult};
use kbhub_core::models::account::Role;
use kbhub_core::models::directory::{DirectoryUser, UserStatus};
use kbhub_core::repository::DirectoryRepository;

fn entry(
    id: u64,
    name: &str,
    email: &str,
    role: Role,
    status: UserStatus,
    joined: (i32, u32, u32),
) -> KbResult<DirectoryUser> {
    let (y, m, d) = joined;
    let joined_at = NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| KbError::Internal(format!("bad seed date for user {id}")))?;
    Ok(DirectoryUser {
        id,
        name: name.into(),
        email: email.into(),
        role,
        status,
        joined_at,
    })
}

/// The mock directory rows, in display order.
pub fn seed_directory() -> KbResult<Vec<DirectoryUser>> {
    use Role::*;
    use UserStatus::*;
    [
        (1, "Admin User", "admin@kbeautyhub.com", Admin, Active, (2023, 1, 10)),
        (2, "Content Editor", "editor@kbeautyhub.com", Editor, Active, (2023, 3, 2)),
        (3, "Report Viewer", "viewer@kbeautyhub.com", Viewer, Active, (2023, 6, 18)),
        (4, "Kim Minji", "minji.kim@example.com", Customer, Active, (2024, 2, 5)),
        (5, "Lee Jiwoo", "jiwoo.lee@example.com", Customer, Inactive, (2024, 4, 21)),
        (6, "Park Seoyeon", "seoyeon.park@example.com", Customer, Suspended, (2024, 7, 9)),
        (7, "Choi Minho", "minho.choi@example.com", Customer, Active, (2024, 9, 30)),
        (8, "Jung Haeun", "haeun.jung@example.com", Editor, Inactive, (2025, 1, 14)),
    ]
    .into_iter()
    .map(|(id, name, email, role, status, joined)| entry(id, name, email, role, status, joined))
    .collect()
}

/// Directory served from a fixed list.
pub struct SeededDirectory {
    users: Vec<DirectoryUser>,
}

impl SeededDirectory {
    pub fn new(users: Vec<DirectoryUser>) -> Self {
        Self { users }
    }

    pub fn seeded() -> KbResult<Self> {
        Ok(Self::new(seed_directory()?))
    }
}

impl DirectoryRepository for SeededDirectory {
    async fn list(&self) -> KbResult<Vec<DirectoryUser>> {
        Ok(self.users.clone())
    }
}
