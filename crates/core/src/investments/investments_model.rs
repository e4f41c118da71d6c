//! Investment domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model for a single portfolio holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    /// Unique key for the holding.
    pub symbol: String,
    pub name: String,
    pub shares: Decimal,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
    /// Informational target allocation percent; not used in calculations.
    pub allocation: f64,
}

impl Investment {
    /// Current market value of the holding.
    pub fn market_value(&self) -> Decimal {
        self.shares * self.current_price
    }

    /// Original cost of the holding.
    pub fn cost_basis(&self) -> Decimal {
        self.shares * self.purchase_price
    }
}

/// Input model for creating a new holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub symbol: String,
    pub name: String,
    pub shares: Decimal,
    pub purchase_price: Decimal,
    /// Defaults to the purchase price when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<Decimal>,
    /// Defaults to zero when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation: Option<f64>,
}

impl NewInvestment {
    /// Validates the new holding data.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Investment symbol cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Partial update for an existing holding. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation: Option<f64>,
}

impl InvestmentUpdate {
    /// Applies the patch to an existing holding.
    pub fn apply_to(self, investment: &mut Investment) {
        if let Some(name) = self.name {
            investment.name = name;
        }
        if let Some(shares) = self.shares {
            investment.shares = shares;
        }
        if let Some(purchase_price) = self.purchase_price {
            investment.purchase_price = purchase_price;
        }
        if let Some(current_price) = self.current_price {
            investment.current_price = current_price;
        }
        if let Some(allocation) = self.allocation {
            investment.allocation = allocation;
        }
    }
}
