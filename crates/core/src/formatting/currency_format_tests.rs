//! Tests for currency display formatting.

use super::CurrencyFormat;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_default_is_en_us_dollars() {
    let format = CurrencyFormat::default();
    assert_eq!(format.format(dec!(1234.5)), "$1,234.50");
}

#[test]
fn test_negative_amounts_keep_the_sign_outside_the_symbol() {
    let format = CurrencyFormat::default();
    assert_eq!(format.format(dec!(-1234.56)), "-$1,234.56");
}

#[test]
fn test_zero_is_not_negative() {
    let format = CurrencyFormat::default();
    assert_eq!(format.format(Decimal::ZERO), "$0.00");
}

#[test]
fn test_rounds_to_two_decimals() {
    let format = CurrencyFormat::default();
    assert_eq!(format.format(dec!(10.005)), "$10.01");
}

#[test]
fn test_german_locale_swaps_separators() {
    let format = CurrencyFormat::new("de-DE", "EUR").unwrap();
    assert_eq!(format.format(dec!(1234567.89)), "\u{20ac}1.234.567,89");
}

#[test]
fn test_unknown_currency_falls_back_to_code_prefix() {
    let format = CurrencyFormat::new("en-US", "chf").unwrap();
    assert_eq!(format.format(dec!(42)), "CHF 42.00");
}

#[test]
fn test_empty_config_values_are_rejected() {
    assert!(CurrencyFormat::new("", "USD").is_err());
    assert!(CurrencyFormat::new("en-US", "  ").is_err());
}
