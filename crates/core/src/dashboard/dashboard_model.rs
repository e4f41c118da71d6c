//! View models handed to the dashboard's rendering layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budgets::Budget;
use crate::goals::Goal;
use crate::metrics::{BudgetUtilization, GoalProgress};

/// Headline numbers for the dashboard stats row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub net_worth: Decimal,
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    /// Already guarded and rounded, e.g. `"42%"`.
    pub savings_rate: String,
    pub net_worth_formatted: String,
    pub monthly_income_formatted: String,
    pub monthly_expenses_formatted: String,
}

/// Labels and series for the spending-by-category donut chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingChartData {
    pub labels: Vec<String>,
    pub series: Vec<Decimal>,
}

/// Labels and series for the portfolio allocation pie chart.
///
/// Series values are market values; the chart renderer turns them into
/// percentages of the whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioChartData {
    pub labels: Vec<String>,
    pub series: Vec<Decimal>,
}

/// Axis labels plus income/expense series for the monthly trends chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendsChartData {
    /// Short month labels, e.g. `"Jan 24"`.
    pub categories: Vec<String>,
    pub income: Vec<Decimal>,
    pub expenses: Vec<Decimal>,
}

/// A budget with its derived utilization, ready for a budget card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOverview {
    pub budget: Budget,
    pub utilization: BudgetUtilization,
}

/// A goal with its derived progress, ready for a goal card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalOverview {
    pub goal: Goal,
    pub progress: GoalProgress,
    pub remaining_formatted: String,
}
