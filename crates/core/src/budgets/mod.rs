//! Budgets module - server-supplied figures, lightly reshaped for display.

mod budgets_model;
mod budgets_service;

pub use budgets_model::{
    Budget, BudgetAlert, BudgetAnalytics, BudgetHistoryPoint, BudgetStatus, CategorySpending,
};
pub use budgets_service::{budget_alerts, budget_history, budget_status, display_progress};
