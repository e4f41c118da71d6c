//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! storage-specific types, allowing for different store implementations.

use async_trait::async_trait;

use super::accounts_model::{Account, AccountUpdate, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// Implementations handle the persistence of account data. The trait is
/// store-agnostic - storage-specific details live in concrete
/// implementations.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Creates a new account, assigning its id.
    async fn create(&self, new_account: NewAccount) -> Result<Account>;

    /// Retrieves an account by its ID.
    ///
    /// Returns `DatabaseError::NotFound` when the id does not exist.
    async fn get_by_id(&self, account_id: &str) -> Result<Account>;

    /// Lists all accounts.
    async fn list(&self) -> Result<Vec<Account>>;

    /// Applies a partial update to an existing account.
    async fn update(&self, account_id: &str, update: AccountUpdate) -> Result<Account>;

    /// Deletes an account by its ID, returning the removed record.
    async fn delete(&self, account_id: &str) -> Result<Account>;
}

/// Trait defining the contract for Account service operations.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Creates a new account with business validation.
    async fn create_account(&self, new_account: NewAccount) -> Result<Account>;

    /// Retrieves an account by ID.
    async fn get_account(&self, account_id: &str) -> Result<Account>;

    /// Lists all accounts.
    async fn get_all_accounts(&self) -> Result<Vec<Account>>;

    /// Updates an existing account with business validation.
    async fn update_account(&self, account_id: &str, update: AccountUpdate) -> Result<Account>;

    /// Deletes an account, returning the removed record.
    async fn delete_account(&self, account_id: &str) -> Result<Account>;
}
