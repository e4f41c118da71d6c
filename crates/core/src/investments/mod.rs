//! Investments module - domain models, services, and traits.
//!
//! Holdings are keyed by symbol; market value is always shares times the
//! current per-share price.

mod investments_model;
mod investments_service;
mod investments_traits;

// Re-export the public interface
pub use investments_model::{Investment, InvestmentUpdate, NewInvestment};
pub use investments_service::InvestmentService;
pub use investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};

#[cfg(test)]
mod investments_model_tests;
