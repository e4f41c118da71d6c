//! Output models of the aggregation engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Total absolute spend for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub category: String,
    pub amount: Decimal,
}

/// Market value of one holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValue {
    pub symbol: String,
    pub market_value: Decimal,
}

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendPoint {
    /// Year-month bucket key, `YYYY-MM`.
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
}

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl MonthlyTrendPoint {
    /// Short axis label for the bucket, e.g. `"Jan 24"` for `"2024-01"`.
    ///
    /// Falls back to the raw bucket key if it does not parse as `YYYY-MM`.
    pub fn label(&self) -> String {
        let mut parts = self.month.splitn(2, '-');
        let year = parts.next().and_then(|y| y.parse::<u32>().ok());
        let month = parts.next().and_then(|m| m.parse::<usize>().ok());
        match (year, month) {
            (Some(year), Some(month)) if (1..=12).contains(&month) => {
                format!("{} {:02}", MONTH_ABBREV[month - 1], year % 100)
            }
            _ => self.month.clone(),
        }
    }
}

/// Progress toward a savings goal.
///
/// `percentage` is unclamped: it exceeds 100 once the goal is passed and
/// goes negative for a negative current amount. `remaining` is negative
/// once the goal is exceeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub percentage: f64,
    pub remaining: Decimal,
}

/// How much of a budget's limit has been consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUtilization {
    pub percentage: f64,
    pub over_budget: bool,
}

/// Unrealized gain or loss on a holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentGainLoss {
    pub gain_loss: Decimal,
    pub gain_loss_percentage: f64,
}
