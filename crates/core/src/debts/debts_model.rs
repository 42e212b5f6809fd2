use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a debt from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebtType {
    Borrowed,
    Lent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebtStatus {
    Active,
    PaidOff,
    Overdue,
    PartiallyPaid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebtPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// A debt tracked against another person.
///
/// `remaining_amount` only ever decreases as payments are recorded and
/// never exceeds the principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub person_name: String,
    #[serde(rename = "type")]
    pub debt_type: DebtType,
    pub principal_amount: Decimal,
    pub remaining_amount: Decimal,
    pub interest_rate: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub status: DebtStatus,
    pub priority: DebtPriority,
}

/// Portfolio-wide debt figures from `/debts/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtStats {
    pub total_borrowed: Decimal,
    pub total_lent: Decimal,
    pub net_debt: Decimal,
    pub active_count: u32,
}
