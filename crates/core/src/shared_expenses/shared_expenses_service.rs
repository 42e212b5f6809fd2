use num_traits::Zero;
use rust_decimal::Decimal;

use super::shared_expenses_model::{LedgerTab, Participant, SharedExpense};

/// The viewer's own participant entry, matched by user id.
pub fn viewer_participant<'a>(
    expense: &'a SharedExpense,
    viewer_id: &str,
) -> Option<&'a Participant> {
    expense
        .participants
        .iter()
        .find(|p| p.user_id.as_deref() == Some(viewer_id))
}

/// True when the expense belongs on the viewer's "you owe" tab: someone
/// else paid, it is not settled, and the viewer's own share is unpaid.
pub fn viewer_owes(expense: &SharedExpense, viewer_id: &str) -> bool {
    if expense.paid_by_user_id == viewer_id || expense.is_settled {
        return false;
    }
    match viewer_participant(expense, viewer_id) {
        Some(participant) => !participant.is_paid,
        None => false,
    }
}

/// True when the expense belongs on the "owed to you" tab: the viewer
/// fronted the money and the bill is not settled, regardless of which
/// individual shares are already paid.
pub fn owed_to_viewer(expense: &SharedExpense, viewer_id: &str) -> bool {
    expense.paid_by_user_id == viewer_id && !expense.is_settled
}

/// Share of participants who have paid, in percent. Zero when the
/// participant list is empty.
pub fn payment_progress(expense: &SharedExpense) -> Decimal {
    let total = expense.participants.len();
    if total == 0 {
        return Decimal::zero();
    }
    let paid = expense.participants.iter().filter(|p| p.is_paid).count();
    Decimal::from(paid as u64) / Decimal::from(total as u64) * Decimal::ONE_HUNDRED
}

/// Applies tab, group, and search filters with AND semantics, in that
/// order. The search is a case-insensitive substring match against the
/// title or the group name.
pub fn filter_ledger<'a>(
    expenses: &'a [SharedExpense],
    viewer_id: &str,
    tab: LedgerTab,
    group: Option<&str>,
    search: Option<&str>,
) -> Vec<&'a SharedExpense> {
    let needle = search.map(|s| s.to_lowercase());

    expenses
        .iter()
        .filter(|e| match tab {
            LedgerTab::All => true,
            LedgerTab::YouOwe => viewer_owes(e, viewer_id),
            LedgerTab::OwedToYou => owed_to_viewer(e, viewer_id),
        })
        .filter(|e| match group {
            Some(group) => e.group_name.as_deref() == Some(group),
            None => true,
        })
        .filter(|e| match &needle {
            Some(needle) => {
                e.title.to_lowercase().contains(needle)
                    || e.group_name
                        .as_deref()
                        .is_some_and(|g| g.to_lowercase().contains(needle))
            }
            None => true,
        })
        .collect()
}

/// Sum of the viewer's own unpaid shares across the "you owe" slice.
pub fn total_viewer_owes(expenses: &[SharedExpense], viewer_id: &str) -> Decimal {
    expenses
        .iter()
        .filter(|e| viewer_owes(e, viewer_id))
        .filter_map(|e| viewer_participant(e, viewer_id))
        .map(|p| p.share_amount)
        .sum()
}

/// Sum of everyone else's unpaid shares across the "owed to you" slice.
pub fn total_owed_to_viewer(expenses: &[SharedExpense], viewer_id: &str) -> Decimal {
    expenses
        .iter()
        .filter(|e| owed_to_viewer(e, viewer_id))
        .flat_map(|e| e.participants.iter())
        .filter(|p| !p.is_paid && p.user_id.as_deref() != Some(viewer_id))
        .map(|p| p.share_amount)
        .sum()
}

// ==================== Tests ====================
