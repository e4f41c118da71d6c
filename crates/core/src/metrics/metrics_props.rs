//! Property tests for the algebraic guarantees of the aggregation engine.

use super::*;
use crate::investments::Investment;
use crate::transactions::Transaction;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

const CATEGORIES: [&str; 5] = ["Food", "Transport", "Rent", "Utilities", "Fun"];

fn arb_transaction() -> impl Strategy<Value = Transaction> {
    (
        -500_000i64..500_000i64,
        0usize..CATEGORIES.len(),
        2020i32..=2025,
        1u32..=12,
        1u32..=28,
    )
        .prop_map(|(cents, category, year, month, day)| Transaction {
            id: format!("t-{year}-{month}-{day}-{cents}"),
            account_id: "acc-1".to_string(),
            amount: Decimal::new(cents, 2),
            date: Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap(),
            category: CATEGORIES[category].to_string(),
            description: String::new(),
        })
}

fn arb_investment() -> impl Strategy<Value = Investment> {
    ("[A-Z]{2,4}", 0i64..100_000, 0i64..100_000, 0i64..100_000).prop_map(
        |(symbol, shares, purchase, current)| Investment {
            name: symbol.clone(),
            symbol,
            shares: Decimal::new(shares, 3),
            purchase_price: Decimal::new(purchase, 2),
            current_price: Decimal::new(current, 2),
            allocation: 0.0,
        },
    )
}

proptest! {
    #[test]
    fn prop_category_spending_sums_to_total_expenses(
        transactions in proptest::collection::vec(arb_transaction(), 0..50)
    ) {
        let by_category: Decimal = category_spending(&transactions)
            .iter()
            .map(|s| s.amount)
            .sum();
        let total_expenses: Decimal = transactions
            .iter()
            .filter(|t| t.amount < Decimal::ZERO)
            .map(|t| t.amount.abs())
            .sum();
        prop_assert_eq!(by_category, total_expenses);
    }

    #[test]
    fn prop_portfolio_values_sum_to_net_worth(
        investments in proptest::collection::vec(arb_investment(), 0..30)
    ) {
        let total: Decimal = portfolio_values(&investments)
            .iter()
            .map(|v| v.market_value)
            .sum();
        prop_assert_eq!(total, net_worth(&[], &investments));
    }

    #[test]
    fn prop_monthly_trend_is_bounded_and_sorted(
        transactions in proptest::collection::vec(arb_transaction(), 0..80),
        window in 1usize..12
    ) {
        let trend = monthly_trend(&transactions, window);
        prop_assert!(trend.len() <= window);
        for pair in trend.windows(2) {
            prop_assert!(pair[0].month < pair[1].month);
        }
    }

    #[test]
    fn prop_every_transaction_lands_in_exactly_one_bucket(
        transactions in proptest::collection::vec(arb_transaction(), 0..80)
    ) {
        // With an unbounded window, bucket totals account for every
        // transaction exactly once.
        let trend = monthly_trend(&transactions, usize::MAX);
        let bucketed: Decimal = trend.iter().map(|p| p.income - p.expenses).sum();
        let raw: Decimal = transactions.iter().map(|t| t.amount).sum();
        prop_assert_eq!(bucketed, raw);
    }

    #[test]
    fn prop_savings_rate_never_divides_by_zero(
        expenses_cents in -500_000i64..500_000
    ) {
        let rate = savings_rate(Decimal::ZERO, Decimal::new(expenses_cents, 2));
        prop_assert_eq!(rate, "0%");
    }
}
