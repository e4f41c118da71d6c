//! Budgets module - domain models, services, and traits.
//!
//! Budgets are keyed by their category string rather than a synthetic id;
//! `spent` is authoritative and is not derived from transactions.

mod budgets_model;
mod budgets_service;
mod budgets_traits;

// Re-export the public interface
pub use budgets_model::{Budget, BudgetPeriod, BudgetUpdate, NewBudget};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
