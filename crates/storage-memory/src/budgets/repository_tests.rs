use std::sync::Arc;

use rust_decimal_macros::dec;

use finboard_core::budgets::{
    BudgetPeriod, BudgetRepositoryTrait, BudgetUpdate, NewBudget,
};
use finboard_core::errors::{DatabaseError, Error};

use super::BudgetRepository;
use crate::latency::LatencyProfile;
use crate::store::MemoryStore;

fn repository() -> BudgetRepository {
    BudgetRepository::new(Arc::new(MemoryStore::new(LatencyProfile::none())))
}

fn new_budget(category: &str) -> NewBudget {
    NewBudget {
        category: category.to_string(),
        limit: dec!(500.00),
        spent: None,
        period: None,
    }
}

#[tokio::test]
async fn test_create_defaults_spent_and_period() {
    let repo = repository();

    let budget = repo.create(new_budget("Food")).await.unwrap();

    assert_eq!(budget.spent, dec!(0));
    assert_eq!(budget.period, BudgetPeriod::Monthly);
}

#[tokio::test]
async fn test_create_duplicate_category_is_unique_violation() {
    let repo = repository();
    repo.create(new_budget("Food")).await.unwrap();

    let err = repo.create(new_budget("Food")).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Database(DatabaseError::UniqueViolation(_))
    ));
}

#[tokio::test]
async fn test_get_by_category_returns_stored_budget() {
    let repo = repository();
    let created = repo.create(new_budget("Food")).await.unwrap();

    let fetched = repo.get_by_category("Food").await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_update_tracks_spent() {
    let repo = repository();
    repo.create(new_budget("Food")).await.unwrap();

    let updated = repo
        .update(
            "Food",
            BudgetUpdate {
                spent: Some(dec!(320.40)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.spent, dec!(320.40));
    assert_eq!(updated.limit, dec!(500.00));
}

#[tokio::test]
async fn test_delete_returns_removed_budget() {
    let repo = repository();
    let created = repo.create(new_budget("Food")).await.unwrap();

    let removed = repo.delete("Food").await.unwrap();

    assert_eq!(removed, created);
    assert!(repo
        .get_by_category("Food")
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn test_unknown_category_is_not_found() {
    let repo = repository();

    assert!(repo
        .get_by_category("Missing")
        .await
        .unwrap_err()
        .is_not_found());
    assert!(repo
        .update("Missing", BudgetUpdate::default())
        .await
        .unwrap_err()
        .is_not_found());
}
