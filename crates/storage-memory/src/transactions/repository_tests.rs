use std::sync::Arc;

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

use finboard_core::transactions::{
    NewTransaction, TransactionRepositoryTrait, TransactionUpdate,
};

use super::TransactionRepository;
use crate::latency::LatencyProfile;
use crate::store::MemoryStore;

fn repository() -> TransactionRepository {
    TransactionRepository::new(Arc::new(MemoryStore::new(LatencyProfile::none())))
}

fn new_transaction(account_id: &str, amount: rust_decimal::Decimal) -> NewTransaction {
    NewTransaction {
        account_id: account_id.to_string(),
        amount,
        date: Some(Utc.with_ymd_and_hms(2024, 2, 10, 9, 0, 0).unwrap()),
        category: "Food".to_string(),
        description: "Groceries".to_string(),
    }
}

#[tokio::test]
async fn test_create_keeps_provided_date() {
    let repo = repository();

    let txn = repo.create(new_transaction("acc-1", dec!(-45.50))).await.unwrap();

    assert!(!txn.id.is_empty());
    assert_eq!(txn.date, Utc.with_ymd_and_hms(2024, 2, 10, 9, 0, 0).unwrap());
}

#[tokio::test]
async fn test_create_without_date_books_now() {
    let repo = repository();
    let before = Utc::now();

    let txn = repo
        .create(NewTransaction {
            date: None,
            ..new_transaction("acc-1", dec!(-45.50))
        })
        .await
        .unwrap();

    assert!(txn.date >= before);
    assert!(txn.date <= Utc::now());
}

#[tokio::test]
async fn test_list_by_account_filters_other_accounts() {
    let repo = repository();
    repo.create(new_transaction("acc-1", dec!(-45.50))).await.unwrap();
    repo.create(new_transaction("acc-2", dec!(-10.00))).await.unwrap();
    repo.create(new_transaction("acc-1", dec!(200.00))).await.unwrap();

    let for_first = repo.list_by_account("acc-1").await.unwrap();

    assert_eq!(for_first.len(), 2);
    assert!(for_first.iter().all(|t| t.account_id == "acc-1"));
}

#[tokio::test]
async fn test_update_applies_partial_patch() {
    let repo = repository();
    let created = repo.create(new_transaction("acc-1", dec!(-45.50))).await.unwrap();

    let updated = repo
        .update(
            &created.id,
            TransactionUpdate {
                category: Some("Transport".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.category, "Transport");
    assert_eq!(updated.amount, dec!(-45.50));
}

#[tokio::test]
async fn test_delete_returns_removed_transaction() {
    let repo = repository();
    let created = repo.create(new_transaction("acc-1", dec!(-45.50))).await.unwrap();

    let removed = repo.delete(&created.id).await.unwrap();

    assert_eq!(removed, created);
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_lookup_unknown_is_not_found() {
    let repo = repository();

    assert!(repo.get_by_id("missing").await.unwrap_err().is_not_found());
    assert!(repo
        .delete("missing")
        .await
        .unwrap_err()
        .is_not_found());
}
