use log::debug;
use std::sync::Arc;

use super::accounts_model::{Account, AccountUpdate, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::Result;

/// Service for managing accounts.
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance.
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;
        debug!("Creating account '{}'", new_account.name);
        self.repository.create(new_account).await
    }

    async fn get_account(&self, account_id: &str) -> Result<Account> {
        self.repository.get_by_id(account_id).await
    }

    async fn get_all_accounts(&self) -> Result<Vec<Account>> {
        self.repository.list().await
    }

    async fn update_account(&self, account_id: &str, update: AccountUpdate) -> Result<Account> {
        update.validate()?;
        self.repository.update(account_id, update).await
    }

    async fn delete_account(&self, account_id: &str) -> Result<Account> {
        self.repository.delete(account_id).await
    }
}
