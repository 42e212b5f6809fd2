use super::nudges_model::{Nudge, NudgeKind, NudgePriority};

/// Section heading for a nudge kind. Exhaustive so that adding a kind
/// without a label is a compile error.
pub fn kind_label(kind: NudgeKind) -> &'static str {
    match kind {
        NudgeKind::BudgetAlert => "Budget Alert",
        NudgeKind::BillReminder => "Bill Reminder",
        NudgeKind::SavingsSuggestion => "Savings Suggestion",
        NudgeKind::SpendingPattern => "Spending Pattern",
        NudgeKind::GoalProgress => "Goal Progress",
    }
}

/// Badge text for a nudge priority.
pub fn priority_label(priority: NudgePriority) -> &'static str {
    match priority {
        NudgePriority::Low => "Low",
        NudgePriority::Medium => "Medium",
        NudgePriority::High => "High",
    }
}

/// How many nudges still await a mark-as-read call.
pub fn unread_count(nudges: &[Nudge]) -> usize {
    nudges.iter().filter(|n| !n.is_read).count()
}

/// Nudges of one kind, input order preserved.
pub fn filter_by_kind(nudges: &[Nudge], kind: NudgeKind) -> Vec<&Nudge> {
    nudges.iter().filter(|n| n.nudge_type == kind).collect()
}

// ==================== Tests ====================
