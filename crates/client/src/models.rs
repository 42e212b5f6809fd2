//! Response shapes specific to backend endpoints. Domain entities live in
//! `takatrack-core`; these wrappers only exist on the wire.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use takatrack_core::expenses::Expense;

/// One page of the expense list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedExpenses {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u32,
}

/// Server-computed totals for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_savings: Decimal,
}

/// Server-computed totals for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlySummary {
    pub year: i32,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_savings: Decimal,
}

/// One point of the income-vs-expense trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingTrendPoint {
    /// Month label as provided by the backend.
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
}
