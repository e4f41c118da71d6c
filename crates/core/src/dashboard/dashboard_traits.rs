//! Dashboard service trait.

use async_trait::async_trait;

use super::dashboard_model::{
    BudgetOverview, DashboardSummary, GoalOverview, PortfolioChartData, SpendingChartData,
    TrendsChartData,
};
use crate::errors::Result;

/// Trait defining the contract for the dashboard aggregation service.
///
/// Every method refetches the record sets and recomputes from scratch;
/// there is no cached state to invalidate.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Headline numbers for the current calendar month.
    async fn get_summary(&self) -> Result<DashboardSummary>;

    /// Headline numbers for a specific calendar month (1-12).
    ///
    /// The monthly filter matches the month of any year, mirroring the
    /// metrics engine.
    async fn get_summary_for_month(&self, month: u32) -> Result<DashboardSummary>;

    /// Spending-by-category donut data.
    async fn spending_chart(&self) -> Result<SpendingChartData>;

    /// Portfolio allocation pie data.
    async fn portfolio_chart(&self) -> Result<PortfolioChartData>;

    /// Monthly income/expense trend data over the given window.
    async fn trends_chart(&self, month_window: usize) -> Result<TrendsChartData>;

    /// Budgets with derived utilization, in store order.
    async fn budget_overviews(&self) -> Result<Vec<BudgetOverview>>;

    /// Goals with derived progress, in store order.
    async fn goal_overviews(&self) -> Result<Vec<GoalOverview>>;
}
