use log::debug;
use std::sync::Arc;

use super::investments_model::{Investment, InvestmentUpdate, NewInvestment};
use super::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
use crate::errors::Result;

/// Service for managing portfolio holdings.
pub struct InvestmentService {
    repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl InvestmentService {
    /// Creates a new InvestmentService instance.
    pub fn new(repository: Arc<dyn InvestmentRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl InvestmentServiceTrait for InvestmentService {
    async fn create_investment(&self, new_investment: NewInvestment) -> Result<Investment> {
        new_investment.validate()?;
        debug!("Creating holding for symbol '{}'", new_investment.symbol);
        self.repository.create(new_investment).await
    }

    async fn get_investment(&self, symbol: &str) -> Result<Investment> {
        self.repository.get_by_symbol(symbol).await
    }

    async fn get_all_investments(&self) -> Result<Vec<Investment>> {
        self.repository.list().await
    }

    async fn update_investment(
        &self,
        symbol: &str,
        update: InvestmentUpdate,
    ) -> Result<Investment> {
        self.repository.update(symbol, update).await
    }

    async fn delete_investment(&self, symbol: &str) -> Result<Investment> {
        self.repository.delete(symbol).await
    }
}
