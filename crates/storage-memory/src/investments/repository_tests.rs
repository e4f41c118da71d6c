use std::sync::Arc;

use rust_decimal_macros::dec;

use finboard_core::errors::{DatabaseError, Error};
use finboard_core::investments::{
    InvestmentRepositoryTrait, InvestmentUpdate, NewInvestment,
};

use super::InvestmentRepository;
use crate::latency::LatencyProfile;
use crate::store::MemoryStore;

fn repository() -> InvestmentRepository {
    InvestmentRepository::new(Arc::new(MemoryStore::new(LatencyProfile::none())))
}

fn new_investment(symbol: &str) -> NewInvestment {
    NewInvestment {
        symbol: symbol.to_string(),
        name: format!("{symbol} Holdings"),
        shares: dec!(10),
        purchase_price: dec!(150.00),
        current_price: None,
        allocation: None,
    }
}

#[tokio::test]
async fn test_create_defaults_price_to_purchase_price() {
    let repo = repository();

    let investment = repo.create(new_investment("AAPL")).await.unwrap();

    assert_eq!(investment.current_price, dec!(150.00));
    assert_eq!(investment.allocation, 0.0);
}

#[tokio::test]
async fn test_create_keeps_explicit_price() {
    let repo = repository();

    let investment = repo
        .create(NewInvestment {
            current_price: Some(dec!(185.40)),
            allocation: Some(25.0),
            ..new_investment("AAPL")
        })
        .await
        .unwrap();

    assert_eq!(investment.current_price, dec!(185.40));
    assert_eq!(investment.allocation, 25.0);
}

#[tokio::test]
async fn test_create_duplicate_symbol_is_unique_violation() {
    let repo = repository();
    repo.create(new_investment("AAPL")).await.unwrap();

    let err = repo.create(new_investment("AAPL")).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Database(DatabaseError::UniqueViolation(_))
    ));
}

#[tokio::test]
async fn test_update_reprices_holding() {
    let repo = repository();
    repo.create(new_investment("AAPL")).await.unwrap();

    let updated = repo
        .update(
            "AAPL",
            InvestmentUpdate {
                current_price: Some(dec!(191.20)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.current_price, dec!(191.20));
    assert_eq!(updated.purchase_price, dec!(150.00));
}

#[tokio::test]
async fn test_delete_returns_removed_holding() {
    let repo = repository();
    let created = repo.create(new_investment("AAPL")).await.unwrap();

    let removed = repo.delete("AAPL").await.unwrap();

    assert_eq!(removed, created);
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_symbol_is_not_found() {
    let repo = repository();

    assert!(repo
        .get_by_symbol("MISSING")
        .await
        .unwrap_err()
        .is_not_found());
}
