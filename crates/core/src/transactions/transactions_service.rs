use log::debug;
use std::sync::Arc;

use super::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Result;

/// Service for managing transactions.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    /// Creates a new TransactionService instance.
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;
        debug!(
            "Creating transaction in category '{}' for account {}",
            new_transaction.category, new_transaction.account_id
        );
        self.repository.create(new_transaction).await
    }

    async fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        self.repository.get_by_id(transaction_id).await
    }

    async fn get_all_transactions(&self) -> Result<Vec<Transaction>> {
        self.repository.list().await
    }

    async fn get_transactions_by_account(&self, account_id: &str) -> Result<Vec<Transaction>> {
        self.repository.list_by_account(account_id).await
    }

    async fn update_transaction(
        &self,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction> {
        update.validate()?;
        self.repository.update(transaction_id, update).await
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        self.repository.delete(transaction_id).await
    }
}
