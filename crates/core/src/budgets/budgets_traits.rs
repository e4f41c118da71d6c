//! Budget repository and service traits.

use async_trait::async_trait;

use super::budgets_model::{Budget, BudgetUpdate, NewBudget};
use crate::errors::Result;

/// Trait defining the contract for Budget repository operations.
///
/// Budgets are addressed by category, which is their unique key.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Creates a new budget.
    ///
    /// Returns `DatabaseError::UniqueViolation` when a budget already
    /// exists for the category.
    async fn create(&self, new_budget: NewBudget) -> Result<Budget>;

    /// Retrieves a budget by its category.
    ///
    /// Returns `DatabaseError::NotFound` when the category has no budget.
    async fn get_by_category(&self, category: &str) -> Result<Budget>;

    /// Lists all budgets.
    async fn list(&self) -> Result<Vec<Budget>>;

    /// Applies a partial update to an existing budget.
    async fn update(&self, category: &str, update: BudgetUpdate) -> Result<Budget>;

    /// Deletes a budget by its category, returning the removed record.
    async fn delete(&self, category: &str) -> Result<Budget>;
}

/// Trait defining the contract for Budget service operations.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    /// Creates a new budget with business validation.
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget>;

    /// Retrieves a budget by category.
    async fn get_budget(&self, category: &str) -> Result<Budget>;

    /// Lists all budgets.
    async fn get_all_budgets(&self) -> Result<Vec<Budget>>;

    /// Updates an existing budget.
    async fn update_budget(&self, category: &str, update: BudgetUpdate) -> Result<Budget>;

    /// Deletes a budget, returning the removed record.
    async fn delete_budget(&self, category: &str) -> Result<Budget>;
}
