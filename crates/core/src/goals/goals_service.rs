use log::debug;
use std::sync::Arc;

use super::goals_model::{Goal, GoalUpdate, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::Result;

/// Service for managing savings goals.
pub struct GoalService {
    repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    /// Creates a new GoalService instance.
    pub fn new(repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl GoalServiceTrait for GoalService {
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        debug!("Creating goal '{}'", new_goal.name);
        self.repository.create(new_goal).await
    }

    async fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        self.repository.get_by_id(goal_id).await
    }

    async fn get_all_goals(&self) -> Result<Vec<Goal>> {
        self.repository.list().await
    }

    async fn update_goal(&self, goal_id: &str, update: GoalUpdate) -> Result<Goal> {
        update.validate()?;
        self.repository.update(goal_id, update).await
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<Goal> {
        self.repository.delete(goal_id).await
    }
}
