use super::predictions_model::{
    AccuracyPoint, CategoryForecastPoint, Prediction, PredictionKind, PredictionTab,
};
use crate::constants::ACCURACY_SERIES_LIMIT;

const OTHER_CATEGORY: &str = "Other";

/// Selects the predictions belonging to a tab. The alerts tab pools the
/// two warning kinds.
pub fn filter_predictions(predictions: &[Prediction], tab: PredictionTab) -> Vec<&Prediction> {
    predictions
        .iter()
        .filter(|p| match tab {
            PredictionTab::Category => p.prediction_type == PredictionKind::CategoryExpense,
            PredictionTab::Recurring => p.prediction_type == PredictionKind::RecurringExpense,
            PredictionTab::Alerts => matches!(
                p.prediction_type,
                PredictionKind::UnusualSpending | PredictionKind::BudgetBreach
            ),
        })
        .collect()
}

/// Predicted-vs-actual pairs for predictions whose actual is known,
/// capped at the chart limit in input order.
pub fn accuracy_series(predictions: &[Prediction]) -> Vec<AccuracyPoint> {
    predictions
        .iter()
        .filter_map(|p| {
            p.actual_amount.map(|actual| AccuracyPoint {
                date: p.prediction_date,
                predicted: p.predicted_amount,
                actual,
            })
        })
        .take(ACCURACY_SERIES_LIMIT)
        .collect()
}

/// One bar per category-expense prediction, uncategorized ones pooled
/// under "Other".
pub fn category_forecast(predictions: &[Prediction]) -> Vec<CategoryForecastPoint> {
    filter_predictions(predictions, PredictionTab::Category)
        .into_iter()
        .map(|p| CategoryForecastPoint {
            category_name: p
                .category_name
                .clone()
                .unwrap_or_else(|| OTHER_CATEGORY.to_string()),
            predicted: p.predicted_amount,
        })
        .collect()
}

// ==================== Tests ====================
