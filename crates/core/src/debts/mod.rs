//! Debts module - borrowed/lent records and payoff progress.

mod debts_model;
mod debts_service;

pub use debts_model::{Debt, DebtPriority, DebtStats, DebtStatus, DebtType};
pub use debts_service::payoff_progress;
