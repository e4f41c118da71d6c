//! Goal domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// What the goal is saving toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    #[default]
    Savings,
    Investment,
    Debt,
    Purchase,
}

/// Domain model for a savings goal.
///
/// `target_amount` should be positive; a zero target makes the progress
/// percentage degenerate (see the metrics module contract).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
}

/// Input model for creating a new goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target_amount: Decimal,
    /// Defaults to zero when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_amount: Option<Decimal>,
    pub target_date: NaiveDate,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
}

impl NewGoal {
    /// Validates the new goal data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Partial update for an existing goal. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<GoalType>,
}

impl GoalUpdate {
    /// Validates the goal update data.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Goal name cannot be empty".to_string(),
                )));
            }
        }
        Ok(())
    }

    /// Applies the patch to an existing goal.
    pub fn apply_to(self, goal: &mut Goal) {
        if let Some(name) = self.name {
            goal.name = name;
        }
        if let Some(target_amount) = self.target_amount {
            goal.target_amount = target_amount;
        }
        if let Some(current_amount) = self.current_amount {
            goal.current_amount = current_amount;
        }
        if let Some(target_date) = self.target_date {
            goal.target_date = target_date;
        }
        if let Some(goal_type) = self.goal_type {
            goal.goal_type = goal_type;
        }
    }
}
