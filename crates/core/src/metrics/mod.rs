//! Derived-metrics aggregation engine.
//!
//! Pure, stateless transformations from raw record slices to the summary
//! structures the dashboard charts consume. Every operation recomputes from
//! scratch on each call - there is no cached or incremental state - and none
//! of them mutate or validate their input.
//!
//! Degenerate arithmetic (zero denominators, empty slices) is part of the
//! contract: ratio-style outputs are `f64` and surface `inf`/`NaN` for the
//! caller to guard against, rather than failing inside the engine.

mod metrics_model;
mod net_worth;
mod portfolio;
mod progress;
mod spending;
mod trends;

pub use metrics_model::{
    BudgetUtilization, CategorySpending, GoalProgress, HoldingValue, InvestmentGainLoss,
    MonthlyTrendPoint,
};
pub use net_worth::net_worth;
pub use portfolio::{investment_gain_loss, portfolio_values};
pub use progress::{budget_utilization, goal_progress};
pub use spending::category_spending;
pub use trends::{
    in_month_of_any_year, monthly_expenses, monthly_income, monthly_trend, monthly_trend_filled,
    savings_rate,
};


#[cfg(test)]
mod metrics_props;
