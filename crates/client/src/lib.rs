//! TakaTrack Client - typed HTTP access to the backend API.
//!
//! Wraps every backend route the pages call behind one authenticated
//! client, and provides the overview-page loader that fans out the
//! dashboard fetches and folds them through the `takatrack-core`
//! derivations.

mod client;
mod dashboard;
mod endpoints;
mod fetch;
mod models;

pub use client::{ApiClient, DEFAULT_API_URL};
pub use dashboard::{DashboardApi, DashboardService};
pub use fetch::FetchOutcome;
pub use models::{MonthlySummary, PagedExpenses, SpendingTrendPoint, YearlySummary};
