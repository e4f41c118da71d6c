//! Calendar-month aggregations: income/expense trends and savings rate.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

use super::metrics_model::MonthlyTrendPoint;
use crate::transactions::Transaction;

/// Year-month bucket key for a timestamp, `YYYY-MM`.
fn month_key(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m").to_string()
}

/// True when `date` falls in calendar month `month` (1-12) of *any* year.
///
/// The year is deliberately ignored: the monthly-income/expense filter has
/// always matched the month number across all years, and dashboards depend
/// on that. Isolated here so the semantics are easy to revisit.
pub fn in_month_of_any_year(date: &DateTime<Utc>, month: u32) -> bool {
    date.month() == month
}

/// Income and expense totals per calendar month, ascending, truncated to
/// the most recent `month_window` buckets.
///
/// Every transaction lands in exactly one bucket (income for positive
/// amounts, expenses as absolute value for negative ones; a zero amount
/// still creates its bucket). Months with no transactions are absent -
/// see [`monthly_trend_filled`] for the gap-free variant.
pub fn monthly_trend(transactions: &[Transaction], month_window: usize) -> Vec<MonthlyTrendPoint> {
    let buckets = bucket_by_month(transactions);
    let skip = buckets.len().saturating_sub(month_window);

    buckets
        .into_iter()
        .skip(skip)
        .map(|(month, (income, expenses))| MonthlyTrendPoint {
            month,
            income,
            expenses,
        })
        .collect()
}

/// Like [`monthly_trend`], but with zero-amount points inserted for empty
/// months between the first and last occupied bucket.
pub fn monthly_trend_filled(
    transactions: &[Transaction],
    month_window: usize,
) -> Vec<MonthlyTrendPoint> {
    let buckets = bucket_by_month(transactions);
    let (first, last) = match (buckets.keys().next(), buckets.keys().next_back()) {
        (Some(first), Some(last)) => (first.clone(), last.clone()),
        _ => return Vec::new(),
    };

    let mut filled = Vec::new();
    let mut cursor = first;
    loop {
        let (income, expenses) = buckets
            .get(&cursor)
            .copied()
            .unwrap_or((Decimal::ZERO, Decimal::ZERO));
        filled.push(MonthlyTrendPoint {
            month: cursor.clone(),
            income,
            expenses,
        });
        if cursor == last {
            break;
        }
        cursor = match next_month_key(&cursor) {
            Some(next) => next,
            // Unparseable bucket key; fall back to the sparse tail.
            None => break,
        };
    }

    let skip = filled.len().saturating_sub(month_window);
    filled.split_off(skip)
}

fn bucket_by_month(transactions: &[Transaction]) -> BTreeMap<String, (Decimal, Decimal)> {
    let mut buckets: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for transaction in transactions {
        let entry = buckets
            .entry(month_key(&transaction.date))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        if transaction.amount > Decimal::ZERO {
            entry.0 += transaction.amount;
        } else {
            entry.1 += transaction.amount.abs();
        }
    }
    buckets
}

fn next_month_key(key: &str) -> Option<String> {
    let (year, month) = key.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let (year, month) = if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    Some(format!("{year:04}-{month:02}"))
}

/// Total income (positive amounts) for the given calendar month of any year.
pub fn monthly_income(transactions: &[Transaction], month: u32) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.is_income() && in_month_of_any_year(&t.date, month))
        .map(|t| t.amount)
        .sum()
}

/// Total absolute expenses (negative amounts) for the given calendar month
/// of any year.
pub fn monthly_expenses(transactions: &[Transaction], month: u32) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.is_expense() && in_month_of_any_year(&t.date, month))
        .map(|t| t.amount.abs())
        .sum()
}

/// Savings rate as a rounded integer percent string, e.g. `"42%"`.
///
/// `(income - expenses) / income`, rounded half away from zero. Returns
/// `"0%"` whenever income is not positive, so zero income never divides.
pub fn savings_rate(income: Decimal, expenses: Decimal) -> String {
    if income <= Decimal::ZERO {
        return "0%".to_string();
    }
    let rate = (income - expenses) / income * Decimal::ONE_HUNDRED;
    format!(
        "{}%",
        rate.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    )
}
