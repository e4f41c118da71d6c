//! Dashboard module - fetch-all-then-aggregate service for the
//! presentation layer.
//!
//! Chart data used to be derived independently inside several UI
//! components; this module is the single place those series come from.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;

// Re-export the public interface
pub use dashboard_model::{
    BudgetOverview, DashboardSummary, GoalOverview, PortfolioChartData, SpendingChartData,
    TrendsChartData,
};
pub use dashboard_service::DashboardService;
pub use dashboard_traits::DashboardServiceTrait;
