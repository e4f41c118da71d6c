use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

use finboard_core::budgets::{Budget, BudgetRepositoryTrait, BudgetUpdate, NewBudget};
use finboard_core::errors::Result;

use crate::errors::StorageError;
use crate::store::{self, MemoryStore};

/// In-memory repository for budgets, keyed by category.
pub struct BudgetRepository {
    store: Arc<MemoryStore>,
}

impl BudgetRepository {
    /// Creates a new BudgetRepository instance.
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    async fn create(&self, new_budget: NewBudget) -> Result<Budget> {
        self.store.pause(self.store.latency.create).await;

        let mut budgets = store::write(&self.store.budgets)?;
        if budgets.iter().any(|b| b.category == new_budget.category) {
            return Err(
                StorageError::Duplicate(format!("budget category {}", new_budget.category)).into(),
            );
        }

        let budget = Budget {
            category: new_budget.category,
            limit: new_budget.limit,
            spent: new_budget.spent.unwrap_or(Decimal::ZERO),
            period: new_budget.period.unwrap_or_default(),
        };
        budgets.push(budget.clone());
        Ok(budget)
    }

    async fn get_by_category(&self, category: &str) -> Result<Budget> {
        self.store.pause(self.store.latency.lookup).await;

        let budgets = store::read(&self.store.budgets)?;
        let budget = budgets
            .iter()
            .find(|b| b.category == category)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(format!("budget category {category}")))?;
        Ok(budget)
    }

    async fn list(&self) -> Result<Vec<Budget>> {
        self.store.pause(self.store.latency.list).await;

        let budgets = store::read(&self.store.budgets)?;
        Ok(budgets.clone())
    }

    async fn update(&self, category: &str, update: BudgetUpdate) -> Result<Budget> {
        self.store.pause(self.store.latency.update).await;

        let mut budgets = store::write(&self.store.budgets)?;
        let budget = budgets
            .iter_mut()
            .find(|b| b.category == category)
            .ok_or_else(|| StorageError::NotFound(format!("budget category {category}")))?;

        update.apply_to(budget);
        Ok(budget.clone())
    }

    async fn delete(&self, category: &str) -> Result<Budget> {
        self.store.pause(self.store.latency.delete).await;

        let mut budgets = store::write(&self.store.budgets)?;
        let index = budgets
            .iter()
            .position(|b| b.category == category)
            .ok_or_else(|| StorageError::NotFound(format!("budget category {category}")))?;

        Ok(budgets.remove(index))
    }
}
