use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use finboard_core::accounts::{Account, AccountRepositoryTrait, AccountUpdate, NewAccount};
use finboard_core::errors::Result;

use crate::errors::StorageError;
use crate::store::{self, MemoryStore};

/// In-memory repository for accounts.
pub struct AccountRepository {
    store: Arc<MemoryStore>,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance.
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<Account> {
        self.store.pause(self.store.latency.create).await;

        let account = Account {
            id: Uuid::new_v4().to_string(),
            name: new_account.name,
            account_type: new_account.account_type,
            balance: new_account.balance,
            last_sync: Utc::now(),
        };

        let mut accounts = store::write(&self.store.accounts)?;
        accounts.push(account.clone());
        Ok(account)
    }

    async fn get_by_id(&self, account_id: &str) -> Result<Account> {
        self.store.pause(self.store.latency.lookup).await;

        let accounts = store::read(&self.store.accounts)?;
        let account = accounts
            .iter()
            .find(|a| a.id == account_id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(format!("account {account_id}")))?;
        Ok(account)
    }

    async fn list(&self) -> Result<Vec<Account>> {
        self.store.pause(self.store.latency.list).await;

        let accounts = store::read(&self.store.accounts)?;
        Ok(accounts.clone())
    }

    async fn update(&self, account_id: &str, update: AccountUpdate) -> Result<Account> {
        self.store.pause(self.store.latency.update).await;

        let mut accounts = store::write(&self.store.accounts)?;
        let account = accounts
            .iter_mut()
            .find(|a| a.id == account_id)
            .ok_or_else(|| StorageError::NotFound(format!("account {account_id}")))?;

        update.apply_to(account, Utc::now());
        Ok(account.clone())
    }

    async fn delete(&self, account_id: &str) -> Result<Account> {
        self.store.pause(self.store.latency.delete).await;

        let mut accounts = store::write(&self.store.accounts)?;
        let index = accounts
            .iter()
            .position(|a| a.id == account_id)
            .ok_or_else(|| StorageError::NotFound(format!("account {account_id}")))?;

        Ok(accounts.remove(index))
    }
}
