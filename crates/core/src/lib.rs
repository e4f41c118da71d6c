//! Finboard Core - Domain entities, services, and derived metrics.
//!
//! This crate contains the core business logic for Finboard.
//! It is storage-agnostic and defines repository traits that are
//! implemented by the `storage-memory` crate.

pub mod accounts;
pub mod budgets;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod formatting;
pub mod goals;
pub mod investments;
pub mod metrics;
pub mod transactions;

// Re-export the aggregation engine and its output models
pub use metrics::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
