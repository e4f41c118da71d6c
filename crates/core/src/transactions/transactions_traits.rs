//! Transaction repository and service traits.

use async_trait::async_trait;

use super::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use crate::errors::Result;

/// Trait defining the contract for Transaction repository operations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Creates a new transaction, assigning its id and defaulting the date.
    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Retrieves a transaction by its ID.
    ///
    /// Returns `DatabaseError::NotFound` when the id does not exist.
    async fn get_by_id(&self, transaction_id: &str) -> Result<Transaction>;

    /// Lists all transactions.
    async fn list(&self) -> Result<Vec<Transaction>>;

    /// Lists the transactions belonging to one account.
    async fn list_by_account(&self, account_id: &str) -> Result<Vec<Transaction>>;

    /// Applies a partial update to an existing transaction.
    async fn update(&self, transaction_id: &str, update: TransactionUpdate)
        -> Result<Transaction>;

    /// Deletes a transaction by its ID, returning the removed record.
    async fn delete(&self, transaction_id: &str) -> Result<Transaction>;
}

/// Trait defining the contract for Transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Creates a new transaction with business validation.
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Retrieves a transaction by ID.
    async fn get_transaction(&self, transaction_id: &str) -> Result<Transaction>;

    /// Lists all transactions.
    async fn get_all_transactions(&self) -> Result<Vec<Transaction>>;

    /// Lists the transactions belonging to one account.
    async fn get_transactions_by_account(&self, account_id: &str) -> Result<Vec<Transaction>>;

    /// Updates an existing transaction with business validation.
    async fn update_transaction(
        &self,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction>;

    /// Deletes a transaction, returning the removed record.
    async fn delete_transaction(&self, transaction_id: &str) -> Result<Transaction>;
}
