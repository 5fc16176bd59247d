//! Integration tests for the seeded account table and directory.

use kbhub_core::error::KbError;
use kbhub_core::models::account::Role;
use kbhub_core::models::directory::{UserFilter, UserStatus};
use kbhub_core::models::permission::PermissionSet;
use kbhub_core::repository::{AccountRepository, DirectoryRepository};
use kbhub_store::{SeededDirectory, StaticAccountRepository};

#[tokio::test]
async fn seeded_accounts_are_reachable_by_id_and_email() {
    let repo = StaticAccountRepository::seeded();
    let accounts = repo.list().await.unwrap();
    assert_eq!(accounts.len(), 3);

    for account in &accounts {
        assert_eq!(repo.get_by_id(account.id).await.unwrap().email, account.email);
        assert_eq!(repo.get_by_email(&account.email).await.unwrap().id, account.id);
        assert!(account.role.can_sign_in());
    }
}

#[tokio::test]
async fn email_lookup_is_case_sensitive() {
    let repo = StaticAccountRepository::seeded();
    let err = repo.get_by_email("ADMIN@kbeautyhub.com").await.unwrap_err();
    assert!(matches!(err, KbError::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let repo = StaticAccountRepository::seeded();
    let err = repo.get_by_id(999).await.unwrap_err();
    assert!(matches!(err, KbError::NotFound { .. }));
}

#[tokio::test]
async fn table_is_fixed_at_construction() {
    let repo = StaticAccountRepository::seeded();
    let before = repo.list().await.unwrap();

    // Lookups never add rows, even for emails that are not present.
    let err = repo.get_by_email("intruder@example.com").await.unwrap_err();
    assert!(matches!(err, KbError::NotFound { .. }));
    let after = repo.list().await.unwrap();
    assert_eq!(before, after);

    let ids: Vec<u64> = after.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(after[0].permissions, PermissionSet::all());
    assert_eq!(after[2].permissions, PermissionSet::of(["dashboard", "reports_view"]));
}

#[tokio::test]
async fn table_loads_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("accounts.json");
    std::fs::write(
        &path,
        r#"[
            {
                "id": 9,
                "email": "ops@kbeautyhub.com",
                "credential": "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaA",
                "display_name": "Ops",
                "role": "editor",
                "permissions": [{"specific": "orders"}]
            }
        ]"#,
    )
    .unwrap();

    let repo = StaticAccountRepository::from_file(&path).unwrap();
    let account = repo.get_by_email("ops@kbeautyhub.com").await.unwrap();
    assert_eq!(account.id, 9);
    assert_eq!(account.role, Role::Editor);
    assert!(account.credential.starts_with("$argon2id$"));
    assert_eq!(account.permissions, PermissionSet::of(["orders"]));
}

#[test]
fn missing_account_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(StaticAccountRepository::from_file(dir.path().join("absent.json")).is_err());
}

#[tokio::test]
async fn directory_filters_preserve_order() {
    let directory = SeededDirectory::seeded().unwrap();
    let users = directory.list().await.unwrap();

    let customers = UserFilter {
        role: Some(Role::Customer),
        ..Default::default()
    };
    let ids: Vec<u64> = customers.apply(&users).iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![4, 5, 6, 7]);

    let active_customers = UserFilter {
        role: Some(Role::Customer),
        status: Some(UserStatus::Active),
        search: None,
    };
    let ids: Vec<u64> = active_customers
        .apply(&users)
        .iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(ids, vec![4, 7]);
}
