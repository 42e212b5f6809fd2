//! Expenses module - raw expense records and the category breakdown.

mod expenses_model;
mod expenses_service;

pub use expenses_model::Expense;
pub use expenses_service::category_breakdown;
