//! Tests for account domain models.

use super::accounts_model::{Account, AccountType, AccountUpdate, NewAccount};
use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

fn sample_account() -> Account {
    Account {
        id: "acc-1".to_string(),
        name: "Main Checking".to_string(),
        account_type: AccountType::Checking,
        balance: dec!(1250.50),
        last_sync: Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap(),
    }
}

#[test]
fn test_account_type_serialization() {
    assert_eq!(
        serde_json::to_string(&AccountType::Checking).unwrap(),
        "\"checking\""
    );
    assert_eq!(serde_json::to_string(&AccountType::Loan).unwrap(), "\"loan\"");
    assert_eq!(
        serde_json::from_str::<AccountType>("\"credit\"").unwrap(),
        AccountType::Credit
    );
}

#[test]
fn test_account_serializes_camel_case() {
    let json = serde_json::to_value(sample_account()).unwrap();
    assert_eq!(json["type"], "checking");
    assert!(json.get("lastSync").is_some());
    assert!(json.get("last_sync").is_none());
}

#[test]
fn test_new_account_rejects_blank_name() {
    let new_account = NewAccount {
        name: "   ".to_string(),
        account_type: AccountType::Savings,
        balance: dec!(0),
    };
    assert!(new_account.validate().is_err());
}

#[test]
fn test_update_applies_only_set_fields() {
    let mut account = sample_account();
    let now = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();

    let update = AccountUpdate {
        balance: Some(dec!(-420.19)),
        ..Default::default()
    };
    update.apply_to(&mut account, now);

    assert_eq!(account.balance, dec!(-420.19));
    assert_eq!(account.name, "Main Checking");
    assert_eq!(account.account_type, AccountType::Checking);
    assert_eq!(account.last_sync, now);
}

#[test]
fn test_update_rejects_blank_name() {
    let update = AccountUpdate {
        name: Some("".to_string()),
        ..Default::default()
    };
    assert!(update.validate().is_err());
}
