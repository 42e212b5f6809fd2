use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment state of one participant in a split bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipantStatus {
    Pending,
    Paid,
    Disputed,
    Waived,
}

/// How a shared expense is divided among participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SplitType {
    Equal,
    Percentage,
    ExactAmount,
    Shares,
}

/// One person's share of a shared expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    /// Absent for participants who are not registered users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub name: String,
    pub share_amount: Decimal,
    pub is_paid: bool,
    pub status: ParticipantStatus,
}

/// A bill split across several people.
///
/// The share amounts are expected to add up to `total_amount`; the
/// backend enforces that, not this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedExpense {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    pub total_amount: Decimal,
    pub paid_by_user_id: String,
    pub split_type: SplitType,
    pub is_settled: bool,
    #[serde(default)]
    pub participants: Vec<Participant>,
    pub date: NaiveDate,
}

/// Which slice of the ledger the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerTab {
    All,
    YouOwe,
    OwedToYou,
}

/// Server-computed balance summary from `/shared-expenses/summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedExpenseSummary {
    pub total_you_owe: Decimal,
    pub total_owed_to_you: Decimal,
    pub net_balance: Decimal,
    pub unsettled_expenses_count: u32,
}
