use std::sync::Arc;

use rust_decimal_macros::dec;

use finboard_core::accounts::{AccountRepositoryTrait, AccountType, AccountUpdate, NewAccount};

use super::AccountRepository;
use crate::latency::LatencyProfile;
use crate::store::MemoryStore;

fn repository() -> AccountRepository {
    AccountRepository::new(Arc::new(MemoryStore::new(LatencyProfile::none())))
}

fn new_account(name: &str) -> NewAccount {
    NewAccount {
        name: name.to_string(),
        account_type: AccountType::Checking,
        balance: dec!(100.00),
    }
}

#[tokio::test]
async fn test_create_assigns_id_and_sync_timestamp() {
    let repo = repository();

    let account = repo.create(new_account("Everyday")).await.unwrap();

    assert!(!account.id.is_empty());
    assert_eq!(account.name, "Everyday");
    assert_eq!(account.balance, dec!(100.00));
}

#[tokio::test]
async fn test_get_by_id_returns_stored_account() {
    let repo = repository();
    let created = repo.create(new_account("Everyday")).await.unwrap();

    let fetched = repo.get_by_id(&created.id).await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_by_id_unknown_is_not_found() {
    let repo = repository();

    let err = repo.get_by_id("missing").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let repo = repository();
    repo.create(new_account("First")).await.unwrap();
    repo.create(new_account("Second")).await.unwrap();

    let accounts = repo.list().await.unwrap();

    let names: Vec<&str> = accounts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_update_applies_patch_and_refreshes_sync() {
    let repo = repository();
    let created = repo.create(new_account("Everyday")).await.unwrap();

    let updated = repo
        .update(
            &created.id,
            AccountUpdate {
                balance: Some(dec!(250.00)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.balance, dec!(250.00));
    assert_eq!(updated.name, "Everyday");
    assert!(updated.last_sync >= created.last_sync);
}

#[tokio::test]
async fn test_update_unknown_is_not_found() {
    let repo = repository();

    let err = repo
        .update("missing", AccountUpdate::default())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_returns_removed_account() {
    let repo = repository();
    let created = repo.create(new_account("Everyday")).await.unwrap();

    let removed = repo.delete(&created.id).await.unwrap();

    assert_eq!(removed, created);
    assert!(repo.get_by_id(&created.id).await.unwrap_err().is_not_found());
}
