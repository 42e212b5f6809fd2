use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single income record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: String,
    pub source: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<String>,
}

/// Aggregate income figures derived from a record list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStats {
    pub total: Decimal,
    pub this_month: Decimal,
    pub last_month: Decimal,
    /// Month-over-month growth in percent. Zero when there is no
    /// prior-month baseline.
    pub growth: Decimal,
    /// Average over the distinct (year, month) pairs that have at least
    /// one record, not over elapsed calendar months.
    pub avg_monthly: Decimal,
    pub count: usize,
}

impl IncomeStats {
    pub fn empty() -> Self {
        IncomeStats {
            total: Decimal::ZERO,
            this_month: Decimal::ZERO,
            last_month: Decimal::ZERO,
            growth: Decimal::ZERO,
            avg_monthly: Decimal::ZERO,
            count: 0,
        }
    }
}

/// One calendar-month bucket of the income trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeTrendPoint {
    /// Short month name, e.g. "Mar".
    pub month: String,
    pub amount: Decimal,
}
