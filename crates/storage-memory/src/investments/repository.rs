use async_trait::async_trait;
use std::sync::Arc;

use finboard_core::errors::Result;
use finboard_core::investments::{
    Investment, InvestmentRepositoryTrait, InvestmentUpdate, NewInvestment,
};

use crate::errors::StorageError;
use crate::store::{self, MemoryStore};

/// In-memory repository for portfolio holdings, keyed by symbol.
pub struct InvestmentRepository {
    store: Arc<MemoryStore>,
}

impl InvestmentRepository {
    /// Creates a new InvestmentRepository instance.
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl InvestmentRepositoryTrait for InvestmentRepository {
    async fn create(&self, new_investment: NewInvestment) -> Result<Investment> {
        self.store.pause(self.store.latency.create).await;

        let mut investments = store::write(&self.store.investments)?;
        if investments
            .iter()
            .any(|i| i.symbol == new_investment.symbol)
        {
            return Err(
                StorageError::Duplicate(format!("investment {}", new_investment.symbol)).into(),
            );
        }

        // A freshly added holding is marked to market at its purchase price.
        let current_price = new_investment
            .current_price
            .unwrap_or(new_investment.purchase_price);
        let investment = Investment {
            symbol: new_investment.symbol,
            name: new_investment.name,
            shares: new_investment.shares,
            purchase_price: new_investment.purchase_price,
            current_price,
            allocation: new_investment.allocation.unwrap_or(0.0),
        };
        investments.push(investment.clone());
        Ok(investment)
    }

    async fn get_by_symbol(&self, symbol: &str) -> Result<Investment> {
        self.store.pause(self.store.latency.lookup).await;

        let investments = store::read(&self.store.investments)?;
        let investment = investments
            .iter()
            .find(|i| i.symbol == symbol)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(format!("investment {symbol}")))?;
        Ok(investment)
    }

    async fn list(&self) -> Result<Vec<Investment>> {
        self.store.pause(self.store.latency.list).await;

        let investments = store::read(&self.store.investments)?;
        Ok(investments.clone())
    }

    async fn update(&self, symbol: &str, update: InvestmentUpdate) -> Result<Investment> {
        self.store.pause(self.store.latency.update).await;

        let mut investments = store::write(&self.store.investments)?;
        let investment = investments
            .iter_mut()
            .find(|i| i.symbol == symbol)
            .ok_or_else(|| StorageError::NotFound(format!("investment {symbol}")))?;

        update.apply_to(investment);
        Ok(investment.clone())
    }

    async fn delete(&self, symbol: &str) -> Result<Investment> {
        self.store.pause(self.store.latency.delete).await;

        let mut investments = store::write(&self.store.investments)?;
        let index = investments
            .iter()
            .position(|i| i.symbol == symbol)
            .ok_or_else(|| StorageError::NotFound(format!("investment {symbol}")))?;

        Ok(investments.remove(index))
    }
}
