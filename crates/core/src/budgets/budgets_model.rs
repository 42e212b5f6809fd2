use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A per-category monthly budget as computed by the backend.
///
/// `remaining`, `percentage_used` and `is_over_budget` are
/// server-authoritative; this layer only classifies and clamps them
/// for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_color: Option<String>,
    /// The budget limit for the month.
    pub amount: Decimal,
    pub spent: Decimal,
    /// May be negative when the budget is exceeded.
    pub remaining: Decimal,
    /// Not clamped by the server; can exceed 100.
    pub percentage_used: Decimal,
    pub is_over_budget: bool,
    pub month: u32,
    pub year: i32,
}

/// Classification of a budget relative to its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetStatus {
    OnTrack,
    NearLimit,
    OverBudget,
}

/// Portfolio-wide budget figures as returned by `/budgets/analytics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAnalytics {
    pub total_budget: Decimal,
    pub total_spent: Decimal,
    pub total_remaining: Decimal,
    pub total_budgets: u32,
    pub over_budget_count: u32,
    pub on_track_count: u32,
    pub near_limit_count: u32,
    pub overall_percentage_used: Decimal,
    #[serde(default)]
    pub top_spending_categories: Vec<CategorySpending>,
}

/// Spend attributed to one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub category_name: String,
    pub spent: Decimal,
}

/// A budget that deserves the user's attention on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAlert {
    pub budget_id: String,
    pub category_name: String,
    pub percentage_used: Decimal,
    pub is_over_budget: bool,
}

/// One month of aggregated budget history for the history chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetHistoryPoint {
    /// Zero-padded sort key, e.g. "2025-03".
    pub month: String,
    pub spent: Decimal,
    pub budget: Decimal,
}
