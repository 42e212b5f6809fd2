use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::goals::goals_model::{NewSavingsGoal, SavingsGoal, SavingsGoalUpdate};

/// Trait for savings goal repository operations.
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<SavingsGoal>>;
    fn insert_new_goal(&self, new_goal: NewSavingsGoal) -> Result<SavingsGoal>;
    fn update_goal(&self, goal_id: &str, update: SavingsGoalUpdate) -> Result<SavingsGoal>;
    fn delete_goal(&self, goal_id: &str) -> Result<usize>;
    fn add_contribution(
        &self,
        goal_id: &str,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<SavingsGoal>;
}

/// Trait for savings goal service operations.
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<SavingsGoal>>;
    fn create_goal(&self, new_goal: NewSavingsGoal) -> Result<SavingsGoal>;
    fn update_goal(&self, goal_id: &str, update: SavingsGoalUpdate) -> Result<SavingsGoal>;
    fn delete_goal(&self, goal_id: &str) -> Result<usize>;
    fn contribute(&self, goal_id: &str, amount: Decimal) -> Result<SavingsGoal>;
}
