//! Recurring expenses module - backend-owned records consumed by the
//! dashboard and the health score.

mod recurring_model;

pub use recurring_model::{RecurringExpense, RecurringFrequency};
