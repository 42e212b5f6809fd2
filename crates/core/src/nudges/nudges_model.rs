use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a nudge is about. The set is closed: an unrecognized type on the
/// wire fails deserialization rather than rendering with a blank label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NudgeKind {
    BudgetAlert,
    BillReminder,
    SavingsSuggestion,
    SpendingPattern,
    GoalProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NudgePriority {
    Low,
    Medium,
    High,
}

/// A backend-generated notification. `is_read` is only toggled through an
/// explicit mark-as-read call, never locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nudge {
    pub id: String,
    #[serde(rename = "type")]
    pub nudge_type: NudgeKind,
    pub title: String,
    pub message: String,
    pub priority: NudgePriority,
    pub is_read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
