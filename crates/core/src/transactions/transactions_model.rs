//! Transaction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a single ledger entry.
///
/// The sign of `amount` classifies the entry: positive amounts are income,
/// negative amounts are expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub category: String,
    pub description: String,
}

impl Transaction {
    /// True when the amount is positive.
    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// True when the amount is negative.
    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

/// Input model for creating a new transaction.
///
/// `date` defaults to the current time when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub account_id: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    pub category: String,
    pub description: String,
}

impl NewTransaction {
    /// Validates the new transaction data.
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accountId".to_string(),
            )));
        }
        if self.category.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Transaction category cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Partial update for an existing transaction. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TransactionUpdate {
    /// Validates the transaction update data.
    pub fn validate(&self) -> Result<()> {
        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Transaction category cannot be empty".to_string(),
                )));
            }
        }
        Ok(())
    }

    /// Applies the patch to an existing transaction.
    pub fn apply_to(self, transaction: &mut Transaction) {
        if let Some(account_id) = self.account_id {
            transaction.account_id = account_id;
        }
        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }
        if let Some(date) = self.date {
            transaction.date = date;
        }
        if let Some(category) = self.category {
            transaction.category = category;
        }
        if let Some(description) = self.description {
            transaction.description = description;
        }
    }
}
