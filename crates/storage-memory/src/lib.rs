//! In-memory storage implementation for Finboard.
//!
//! The store keeps every collection in a `RwLock<Vec<T>>` behind a shared
//! [`MemoryStore`] and simulates per-operation request latency, standing in
//! for a remote persistence API during development and demos. Repositories
//! implement the storage-agnostic traits defined in `finboard-core`.

pub mod accounts;
pub mod budgets;
pub mod errors;
pub mod goals;
pub mod investments;
pub mod latency;
pub mod seed;
pub mod store;
pub mod transactions;

pub use accounts::AccountRepository;
pub use budgets::BudgetRepository;
pub use errors::StorageError;
pub use goals::GoalRepository;
pub use investments::InvestmentRepository;
pub use latency::LatencyProfile;
pub use store::MemoryStore;
pub use transactions::TransactionRepository;
