use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use finboard_core::goals::{GoalRepositoryTrait, GoalType, GoalUpdate, NewGoal};

use super::GoalRepository;
use crate::latency::LatencyProfile;
use crate::store::MemoryStore;

fn repository() -> GoalRepository {
    GoalRepository::new(Arc::new(MemoryStore::new(LatencyProfile::none())))
}

fn new_goal(name: &str) -> NewGoal {
    NewGoal {
        name: name.to_string(),
        target_amount: dec!(10000.00),
        current_amount: None,
        target_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        goal_type: GoalType::Savings,
    }
}

#[tokio::test]
async fn test_create_assigns_id_and_defaults_progress() {
    let repo = repository();

    let goal = repo.create(new_goal("Emergency Fund")).await.unwrap();

    assert!(!goal.id.is_empty());
    assert_eq!(goal.current_amount, dec!(0));
    assert_eq!(goal.goal_type, GoalType::Savings);
}

#[tokio::test]
async fn test_create_assigns_distinct_ids() {
    let repo = repository();

    let first = repo.create(new_goal("Emergency Fund")).await.unwrap();
    let second = repo.create(new_goal("Vacation")).await.unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_update_advances_progress() {
    let repo = repository();
    let created = repo.create(new_goal("Emergency Fund")).await.unwrap();

    let updated = repo
        .update(
            &created.id,
            GoalUpdate {
                current_amount: Some(dec!(2500.00)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.current_amount, dec!(2500.00));
    assert_eq!(updated.target_amount, dec!(10000.00));
}

#[tokio::test]
async fn test_delete_returns_removed_goal() {
    let repo = repository();
    let created = repo.create(new_goal("Emergency Fund")).await.unwrap();

    let removed = repo.delete(&created.id).await.unwrap();

    assert_eq!(removed, created);
    assert!(repo.get_by_id(&created.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_unknown_goal_is_not_found() {
    let repo = repository();

    assert!(repo.get_by_id("missing").await.unwrap_err().is_not_found());
    assert!(repo
        .update("missing", GoalUpdate::default())
        .await
        .unwrap_err()
        .is_not_found());
}
