//! Dashboard module - assembles the overview snapshot from the
//! per-domain derivations.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::DashboardSnapshot;
pub use dashboard_service::{assemble_dashboard, DashboardInputs};
