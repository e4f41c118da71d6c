//! Tests for investment domain models.

use super::investments_model::{Investment, InvestmentUpdate, NewInvestment};
use rust_decimal_macros::dec;

fn sample_holding() -> Investment {
    Investment {
        symbol: "VTI".to_string(),
        name: "Vanguard Total Stock Market".to_string(),
        shares: dec!(12.5),
        purchase_price: dec!(200),
        current_price: dec!(220),
        allocation: 40.0,
    }
}

#[test]
fn test_market_value_is_shares_times_current_price() {
    assert_eq!(sample_holding().market_value(), dec!(2750));
}

#[test]
fn test_cost_basis_is_shares_times_purchase_price() {
    assert_eq!(sample_holding().cost_basis(), dec!(2500));
}

#[test]
fn test_new_investment_rejects_blank_symbol() {
    let new_investment = NewInvestment {
        symbol: " ".to_string(),
        name: "Nameless".to_string(),
        shares: dec!(1),
        purchase_price: dec!(10),
        current_price: None,
        allocation: None,
    };
    assert!(new_investment.validate().is_err());
}

#[test]
fn test_update_leaves_unset_fields_alone() {
    let mut holding = sample_holding();
    let update = InvestmentUpdate {
        current_price: Some(dec!(180)),
        ..Default::default()
    };
    update.apply_to(&mut holding);

    assert_eq!(holding.current_price, dec!(180));
    assert_eq!(holding.shares, dec!(12.5));
    assert_eq!(holding.purchase_price, dec!(200));
}

#[test]
fn test_investment_serializes_camel_case() {
    let json = serde_json::to_value(sample_holding()).unwrap();
    assert!(json.get("purchasePrice").is_some());
    assert!(json.get("currentPrice").is_some());
    assert!(json.get("purchase_price").is_none());
}
