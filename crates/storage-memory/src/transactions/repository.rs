use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use finboard_core::errors::Result;
use finboard_core::transactions::{
    NewTransaction, Transaction, TransactionRepositoryTrait, TransactionUpdate,
};

use crate::errors::StorageError;
use crate::store::{self, MemoryStore};

/// In-memory repository for transactions.
pub struct TransactionRepository {
    store: Arc<MemoryStore>,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository instance.
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        self.store.pause(self.store.latency.create).await;

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            account_id: new_transaction.account_id,
            amount: new_transaction.amount,
            // Undated entries are booked at the moment of creation.
            date: new_transaction.date.unwrap_or_else(Utc::now),
            category: new_transaction.category,
            description: new_transaction.description,
        };

        let mut transactions = store::write(&self.store.transactions)?;
        transactions.push(transaction.clone());
        Ok(transaction)
    }

    async fn get_by_id(&self, transaction_id: &str) -> Result<Transaction> {
        self.store.pause(self.store.latency.lookup).await;

        let transactions = store::read(&self.store.transactions)?;
        let transaction = transactions
            .iter()
            .find(|t| t.id == transaction_id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(format!("transaction {transaction_id}")))?;
        Ok(transaction)
    }

    async fn list(&self) -> Result<Vec<Transaction>> {
        self.store.pause(self.store.latency.list).await;

        let transactions = store::read(&self.store.transactions)?;
        Ok(transactions.clone())
    }

    async fn list_by_account(&self, account_id: &str) -> Result<Vec<Transaction>> {
        self.store.pause(self.store.latency.list).await;

        let transactions = store::read(&self.store.transactions)?;
        Ok(transactions
            .iter()
            .filter(|t| t.account_id == account_id)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction> {
        self.store.pause(self.store.latency.update).await;

        let mut transactions = store::write(&self.store.transactions)?;
        let transaction = transactions
            .iter_mut()
            .find(|t| t.id == transaction_id)
            .ok_or_else(|| StorageError::NotFound(format!("transaction {transaction_id}")))?;

        update.apply_to(transaction);
        Ok(transaction.clone())
    }

    async fn delete(&self, transaction_id: &str) -> Result<Transaction> {
        self.store.pause(self.store.latency.delete).await;

        let mut transactions = store::write(&self.store.transactions)?;
        let index = transactions
            .iter()
            .position(|t| t.id == transaction_id)
            .ok_or_else(|| StorageError::NotFound(format!("transaction {transaction_id}")))?;

        Ok(transactions.remove(index))
    }
}
