//! Incomes module - records and derived analytics.

mod incomes_model;
mod incomes_service;

pub use incomes_model::{Income, IncomeStats, IncomeTrendPoint};
pub use incomes_service::{income_stats, income_trend};
