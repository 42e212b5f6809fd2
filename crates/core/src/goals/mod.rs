//! Savings goals module - the one locally-owned collection.
//!
//! Goals never touch the backend: the whole collection is serialized as a
//! versioned document into the key-value store, and every mutation is a
//! read-modify-write of that document.

mod goals_engine;
mod goals_errors;
mod goals_model;
mod goals_repository;
mod goals_service;
mod goals_traits;

pub use goals_engine::{
    calculate_progress, days_remaining, milestones, monthly_target_needed, sort_for_display,
    Milestone, MILESTONES,
};
pub use goals_errors::GoalError;
pub use goals_model::{
    Contribution, GoalPriority, GoalTemplate, GoalsDocument, NewSavingsGoal, SavingsGoal,
    SavingsGoalUpdate,
};
pub use goals_repository::GoalRepository;
pub use goals_service::{goal_templates, GoalService};
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
