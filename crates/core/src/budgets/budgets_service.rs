use log::debug;
use std::sync::Arc;

use super::budgets_model::{Budget, BudgetUpdate, NewBudget};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::Result;

/// Service for managing budgets.
pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
}

impl BudgetService {
    /// Creates a new BudgetService instance.
    pub fn new(repository: Arc<dyn BudgetRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget> {
        new_budget.validate()?;
        debug!("Creating budget for category '{}'", new_budget.category);
        self.repository.create(new_budget).await
    }

    async fn get_budget(&self, category: &str) -> Result<Budget> {
        self.repository.get_by_category(category).await
    }

    async fn get_all_budgets(&self) -> Result<Vec<Budget>> {
        self.repository.list().await
    }

    async fn update_budget(&self, category: &str, update: BudgetUpdate) -> Result<Budget> {
        self.repository.update(category, update).await
    }

    async fn delete_budget(&self, category: &str) -> Result<Budget> {
        self.repository.delete(category).await
    }
}
