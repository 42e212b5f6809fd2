//! Shared expenses module - split bills and the owe/owed ledger view.

mod shared_expenses_model;
mod shared_expenses_service;

pub use shared_expenses_model::{
    LedgerTab, Participant, ParticipantStatus, SharedExpense, SharedExpenseSummary, SplitType,
};
pub use shared_expenses_service::{
    filter_ledger, owed_to_viewer, payment_progress, total_owed_to_viewer, total_viewer_owes,
    viewer_owes, viewer_participant,
};
