use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::goals_engine::sort_for_display;
use super::goals_model::{GoalPriority, GoalTemplate, NewSavingsGoal, SavingsGoal, SavingsGoalUpdate};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::Result;

pub struct GoalService<T: GoalRepositoryTrait> {
    goal_repo: Arc<T>,
}

impl<T: GoalRepositoryTrait> GoalService<T> {
    pub fn new(goal_repo: Arc<T>) -> Self {
        GoalService { goal_repo }
    }
}

impl<T: GoalRepositoryTrait + Send + Sync> GoalServiceTrait for GoalService<T> {
    /// Goals in display order: high priority first, stable within a
    /// priority.
    fn get_goals(&self) -> Result<Vec<SavingsGoal>> {
        let mut goals = self.goal_repo.load_goals()?;
        sort_for_display(&mut goals);
        Ok(goals)
    }

    fn create_goal(&self, new_goal: NewSavingsGoal) -> Result<SavingsGoal> {
        self.goal_repo.insert_new_goal(new_goal)
    }

    fn update_goal(&self, goal_id: &str, update: SavingsGoalUpdate) -> Result<SavingsGoal> {
        self.goal_repo.update_goal(goal_id, update)
    }

    fn delete_goal(&self, goal_id: &str) -> Result<usize> {
        self.goal_repo.delete_goal(goal_id)
    }

    /// Records a deposit dated today and bumps the goal's saved amount.
    fn contribute(&self, goal_id: &str, amount: Decimal) -> Result<SavingsGoal> {
        let today = Utc::now().naive_utc().date();
        self.goal_repo.add_contribution(goal_id, amount, today)
    }
}

/// Pre-filled suggestions offered in the goal creation dialog.
pub fn goal_templates() -> Vec<GoalTemplate> {
    vec![
        GoalTemplate {
            name: "Emergency Fund".to_string(),
            category: "Safety Net".to_string(),
            target_amount: dec!(10000),
            priority: GoalPriority::High,
        },
        GoalTemplate {
            name: "Dream Vacation".to_string(),
            category: "Travel".to_string(),
            target_amount: dec!(3000),
            priority: GoalPriority::Medium,
        },
        GoalTemplate {
            name: "New Car".to_string(),
            category: "Transport".to_string(),
            target_amount: dec!(15000),
            priority: GoalPriority::Medium,
        },
        GoalTemplate {
            name: "House Down Payment".to_string(),
            category: "Housing".to_string(),
            target_amount: dec!(50000),
            priority: GoalPriority::High,
        },
        GoalTemplate {
            name: "New Laptop".to_string(),
            category: "Tech".to_string(),
            target_amount: dec!(1500),
            priority: GoalPriority::Low,
        },
    ]
}

// ==================== Tests ====================
