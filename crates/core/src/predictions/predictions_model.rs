use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a prediction is about. The set is closed: an unknown type on the
/// wire is a deserialization error, not a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PredictionKind {
    CategoryExpense,
    RecurringExpense,
    UnusualSpending,
    BudgetBreach,
}

/// Which prediction view the user has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionTab {
    Category,
    Recurring,
    Alerts,
}

/// A forecast produced by the backend. All figures are server-computed;
/// this layer only filters and shapes them for charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub id: String,
    pub prediction_type: PredictionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    pub predicted_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_amount: Option<Decimal>,
    /// Model confidence in [0, 100].
    pub confidence: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_percentage: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance: Option<Decimal>,
    pub prediction_date: NaiveDate,
}

/// Accuracy aggregates from `/predictions/accuracy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccuracyStats {
    pub average_accuracy: Decimal,
    pub total_predictions: u32,
    pub predictions_with_actuals: u32,
}

/// One predicted-vs-actual pair for the accuracy chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccuracyPoint {
    pub date: NaiveDate,
    pub predicted: Decimal,
    pub actual: Decimal,
}

/// One bar of the per-category forecast chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryForecastPoint {
    pub category_name: String,
    pub predicted: Decimal,
}
