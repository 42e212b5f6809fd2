//! Nudges module - backend-generated notifications with client-side
//! filtering and display labels.

mod nudges_model;
mod nudges_service;

pub use nudges_model::{Nudge, NudgeKind, NudgePriority};
pub use nudges_service::{filter_by_kind, kind_label, priority_label, unread_count};
