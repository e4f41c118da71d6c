//! Shared in-memory record store.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use finboard_core::accounts::Account;
use finboard_core::budgets::Budget;
use finboard_core::goals::Goal;
use finboard_core::investments::Investment;
use finboard_core::transactions::Transaction;

use crate::errors::StorageError;
use crate::latency::LatencyProfile;
use crate::seed;

/// All record collections behind one shared handle.
///
/// Repositories clone records in and out; no reference to stored data
/// ever escapes the store, so callers cannot mutate it behind the locks.
pub struct MemoryStore {
    pub(crate) latency: LatencyProfile,
    pub(crate) accounts: RwLock<Vec<Account>>,
    pub(crate) transactions: RwLock<Vec<Transaction>>,
    pub(crate) budgets: RwLock<Vec<Budget>>,
    pub(crate) investments: RwLock<Vec<Investment>>,
    pub(crate) goals: RwLock<Vec<Goal>>,
}

impl MemoryStore {
    /// Creates an empty store with the given latency profile.
    pub fn new(latency: LatencyProfile) -> Self {
        Self {
            latency,
            accounts: RwLock::new(Vec::new()),
            transactions: RwLock::new(Vec::new()),
            budgets: RwLock::new(Vec::new()),
            investments: RwLock::new(Vec::new()),
            goals: RwLock::new(Vec::new()),
        }
    }

    /// Creates a store preloaded with the demo dataset.
    pub fn with_demo_data(latency: LatencyProfile) -> Self {
        let data = seed::demo_dataset();
        log::debug!(
            "Seeding demo store: {} accounts, {} transactions, {} budgets, {} investments, {} goals",
            data.accounts.len(),
            data.transactions.len(),
            data.budgets.len(),
            data.investments.len(),
            data.goals.len()
        );
        Self {
            latency,
            accounts: RwLock::new(data.accounts),
            transactions: RwLock::new(data.transactions),
            budgets: RwLock::new(data.budgets),
            investments: RwLock::new(data.investments),
            goals: RwLock::new(data.goals),
        }
    }

    /// Sleeps for the operation's simulated latency.
    pub(crate) async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(LatencyProfile::simulated())
    }
}

/// Acquires a read guard, surfacing lock poisoning as a storage error.
pub(crate) fn read<T>(
    lock: &RwLock<Vec<T>>,
) -> Result<RwLockReadGuard<'_, Vec<T>>, StorageError> {
    lock.read().map_err(|e| StorageError::Poisoned(e.to_string()))
}

/// Acquires a write guard, surfacing lock poisoning as a storage error.
pub(crate) fn write<T>(
    lock: &RwLock<Vec<T>>,
) -> Result<RwLockWriteGuard<'_, Vec<T>>, StorageError> {
    lock.write().map_err(|e| StorageError::Poisoned(e.to_string()))
}
