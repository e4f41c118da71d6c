use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use finboard_core::errors::Result;
use finboard_core::goals::{Goal, GoalRepositoryTrait, GoalUpdate, NewGoal};

use crate::errors::StorageError;
use crate::store::{self, MemoryStore};

/// In-memory repository for savings goals.
pub struct GoalRepository {
    store: Arc<MemoryStore>,
}

impl GoalRepository {
    /// Creates a new GoalRepository instance.
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    async fn create(&self, new_goal: NewGoal) -> Result<Goal> {
        self.store.pause(self.store.latency.create).await;

        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            name: new_goal.name,
            target_amount: new_goal.target_amount,
            current_amount: new_goal.current_amount.unwrap_or(Decimal::ZERO),
            target_date: new_goal.target_date,
            goal_type: new_goal.goal_type,
        };

        let mut goals = store::write(&self.store.goals)?;
        goals.push(goal.clone());
        Ok(goal)
    }

    async fn get_by_id(&self, goal_id: &str) -> Result<Goal> {
        self.store.pause(self.store.latency.lookup).await;

        let goals = store::read(&self.store.goals)?;
        let goal = goals
            .iter()
            .find(|g| g.id == goal_id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(format!("goal {goal_id}")))?;
        Ok(goal)
    }

    async fn list(&self) -> Result<Vec<Goal>> {
        self.store.pause(self.store.latency.list).await;

        let goals = store::read(&self.store.goals)?;
        Ok(goals.clone())
    }

    async fn update(&self, goal_id: &str, update: GoalUpdate) -> Result<Goal> {
        self.store.pause(self.store.latency.update).await;

        let mut goals = store::write(&self.store.goals)?;
        let goal = goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| StorageError::NotFound(format!("goal {goal_id}")))?;

        update.apply_to(goal);
        Ok(goal.clone())
    }

    async fn delete(&self, goal_id: &str) -> Result<Goal> {
        self.store.pause(self.store.latency.delete).await;

        let mut goals = store::write(&self.store.goals)?;
        let index = goals
            .iter()
            .position(|g| g.id == goal_id)
            .ok_or_else(|| StorageError::NotFound(format!("goal {goal_id}")))?;

        Ok(goals.remove(index))
    }
}
