//! Predictions module - server-generated forecasts, displayed and
//! lightly reshaped client-side.

mod predictions_model;
mod predictions_service;

pub use predictions_model::{
    AccuracyPoint, AccuracyStats, CategoryForecastPoint, Prediction, PredictionKind, PredictionTab,
};
pub use predictions_service::{accuracy_series, category_forecast, filter_predictions};
