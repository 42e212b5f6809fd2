/// Decimal precision for display aggregates
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of calendar months covered by trend charts
pub const TREND_MONTHS: u32 = 6;

/// Percent-used threshold at which a budget counts as near its limit
pub const NEAR_LIMIT_THRESHOLD: u32 = 80;

/// Approximate days per month used for contribution pacing
pub const DAYS_PER_MONTH: i64 = 30;

/// Store key for the savings goals document
pub const GOALS_STORE_KEY: &str = "savingsGoals";

/// Current schema version of the savings goals document
pub const GOALS_SCHEMA_VERSION: u32 = 1;

/// Maximum number of budget alerts surfaced on the dashboard
pub const DASHBOARD_ALERT_LIMIT: usize = 3;

/// Maximum number of categories in the dashboard spending breakdown
pub const CATEGORY_BREAKDOWN_LIMIT: usize = 5;

/// Maximum number of points in the prediction accuracy series
pub const ACCURACY_SERIES_LIMIT: usize = 10;
