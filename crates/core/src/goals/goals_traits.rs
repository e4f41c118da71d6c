//! Goal repository and service traits.

use async_trait::async_trait;

use super::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::errors::Result;

/// Trait defining the contract for Goal repository operations.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Creates a new goal, assigning its id.
    async fn create(&self, new_goal: NewGoal) -> Result<Goal>;

    /// Retrieves a goal by its ID.
    ///
    /// Returns `DatabaseError::NotFound` when the id does not exist.
    async fn get_by_id(&self, goal_id: &str) -> Result<Goal>;

    /// Lists all goals.
    async fn list(&self) -> Result<Vec<Goal>>;

    /// Applies a partial update to an existing goal.
    async fn update(&self, goal_id: &str, update: GoalUpdate) -> Result<Goal>;

    /// Deletes a goal by its ID, returning the removed record.
    async fn delete(&self, goal_id: &str) -> Result<Goal>;
}

/// Trait defining the contract for Goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    /// Creates a new goal with business validation.
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;

    /// Retrieves a goal by ID.
    async fn get_goal(&self, goal_id: &str) -> Result<Goal>;

    /// Lists all goals.
    async fn get_all_goals(&self) -> Result<Vec<Goal>>;

    /// Updates an existing goal with business validation.
    async fn update_goal(&self, goal_id: &str, update: GoalUpdate) -> Result<Goal>;

    /// Deletes a goal, returning the removed record.
    async fn delete_goal(&self, goal_id: &str) -> Result<Goal>;
}
