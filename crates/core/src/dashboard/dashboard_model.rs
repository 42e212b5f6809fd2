use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budgets::{BudgetAlert, CategorySpending};
use crate::incomes::IncomeStats;

/// Everything the overview page shows, assembled in one place from the
/// individually fetched lists. Any input that failed to load arrives as
/// an empty list and degrades its own card only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub income: IncomeStats,
    pub health_score: u32,
    pub budget_alerts: Vec<BudgetAlert>,
    pub category_breakdown: Vec<CategorySpending>,
    pub unread_nudges: usize,
    /// Positive when others owe the viewer more than the viewer owes.
    pub net_shared_balance: Decimal,
}
