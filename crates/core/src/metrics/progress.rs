//! Goal progress and budget utilization ratios.

use super::metrics_model::{BudgetUtilization, GoalProgress};
use super::portfolio::to_f64;
use crate::budgets::Budget;
use crate::goals::Goal;

/// Progress toward a goal: unclamped percentage and the amount remaining.
///
/// A zero target amount makes the percentage `inf`/`NaN`; the engine does
/// not guard this (degenerate-input contract).
pub fn goal_progress(goal: &Goal) -> GoalProgress {
    GoalProgress {
        percentage: to_f64(goal.current_amount) / to_f64(goal.target_amount) * 100.0,
        remaining: goal.target_amount - goal.current_amount,
    }
}

/// How much of the budget's limit has been spent.
///
/// `over_budget` is strictly greater than 100 percent - spending exactly
/// the limit is not over budget. A zero limit makes the percentage
/// `inf`/`NaN`, which still compares as over budget for positive spend.
pub fn budget_utilization(budget: &Budget) -> BudgetUtilization {
    let percentage = to_f64(budget.spent) / to_f64(budget.limit) * 100.0;
    BudgetUtilization {
        percentage,
        over_budget: percentage > 100.0,
    }
}
