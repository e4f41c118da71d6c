//! Investment repository and service traits.

use async_trait::async_trait;

use super::investments_model::{Investment, InvestmentUpdate, NewInvestment};
use crate::errors::Result;

/// Trait defining the contract for Investment repository operations.
///
/// Holdings are addressed by symbol, which is their unique key.
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    /// Creates a new holding.
    ///
    /// Returns `DatabaseError::UniqueViolation` when the symbol is
    /// already held.
    async fn create(&self, new_investment: NewInvestment) -> Result<Investment>;

    /// Retrieves a holding by its symbol.
    ///
    /// Returns `DatabaseError::NotFound` when the symbol is not held.
    async fn get_by_symbol(&self, symbol: &str) -> Result<Investment>;

    /// Lists all holdings.
    async fn list(&self) -> Result<Vec<Investment>>;

    /// Applies a partial update to an existing holding.
    async fn update(&self, symbol: &str, update: InvestmentUpdate) -> Result<Investment>;

    /// Deletes a holding by its symbol, returning the removed record.
    async fn delete(&self, symbol: &str) -> Result<Investment>;
}

/// Trait defining the contract for Investment service operations.
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    /// Creates a new holding with business validation.
    async fn create_investment(&self, new_investment: NewInvestment) -> Result<Investment>;

    /// Retrieves a holding by symbol.
    async fn get_investment(&self, symbol: &str) -> Result<Investment>;

    /// Lists all holdings.
    async fn get_all_investments(&self) -> Result<Vec<Investment>>;

    /// Updates an existing holding.
    async fn update_investment(&self, symbol: &str, update: InvestmentUpdate)
        -> Result<Investment>;

    /// Deletes a holding, returning the removed record.
    async fn delete_investment(&self, symbol: &str) -> Result<Investment>;
}
