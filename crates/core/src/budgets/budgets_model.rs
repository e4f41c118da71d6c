//! Budget domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Budgeting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

/// Domain model for a per-category spending budget.
///
/// `limit` should be positive; a zero limit makes the utilization
/// percentage degenerate (see the metrics module contract).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Unique key for the budget.
    pub category: String,
    pub limit: Decimal,
    /// Amount already spent this period. Maintained by the caller,
    /// never recomputed from transactions.
    pub spent: Decimal,
    pub period: BudgetPeriod,
}

/// Input model for creating a new budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub category: String,
    pub limit: Decimal,
    /// Defaults to zero when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent: Option<Decimal>,
    /// Defaults to monthly when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<BudgetPeriod>,
}

impl NewBudget {
    /// Validates the new budget data.
    pub fn validate(&self) -> Result<()> {
        if self.category.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Budget category cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Partial update for an existing budget. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<BudgetPeriod>,
}

impl BudgetUpdate {
    /// Applies the patch to an existing budget.
    pub fn apply_to(self, budget: &mut Budget) {
        if let Some(limit) = self.limit {
            budget.limit = limit;
        }
        if let Some(spent) = self.spent {
            budget.spent = spent;
        }
        if let Some(period) = self.period {
            budget.period = period;
        }
    }
}
