//! Pure progress math for savings goals.
//!
//! Every function here is a deterministic function of its arguments;
//! "today" is always passed in explicitly.

use chrono::NaiveDate;
use num_traits::Zero;
use rust_decimal::Decimal;

use super::goals_model::SavingsGoal;
use crate::constants::DAYS_PER_MONTH;

/// A fixed progress threshold that unlocks a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub threshold: u32,
    pub label: &'static str,
}

/// Badge thresholds, ascending. Milestones are cumulative: a goal at 80%
/// carries the 25/50/75 badges, not just the highest one reached.
pub const MILESTONES: [Milestone; 4] = [
    Milestone {
        threshold: 25,
        label: "Started!",
    },
    Milestone {
        threshold: 50,
        label: "Halfway!",
    },
    Milestone {
        threshold: 75,
        label: "Almost there!",
    },
    Milestone {
        threshold: 100,
        label: "Achieved!",
    },
];

/// Progress towards the target in percent, clamped to 100.
///
/// A non-positive target is treated as already achieved rather than a
/// division error.
pub fn calculate_progress(current: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::zero() {
        return Decimal::ONE_HUNDRED;
    }
    (current / target * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED)
}

/// Whole days from `today` until the deadline. Negative when overdue;
/// deliberately not clamped.
pub fn days_remaining(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

/// The contribution per month still needed to reach the target by the
/// deadline, using approximate 30-day months. Zero when the deadline
/// leaves no time to pace against.
pub fn monthly_target_needed(goal: &SavingsGoal, today: NaiveDate) -> Decimal {
    let months = Decimal::from(days_remaining(goal.deadline, today)) / Decimal::from(DAYS_PER_MONTH);
    if months > Decimal::zero() {
        (goal.target_amount - goal.current_amount) / months
    } else {
        Decimal::zero()
    }
}

/// All milestones unlocked at the given progress, ascending.
pub fn milestones(progress: Decimal) -> Vec<Milestone> {
    MILESTONES
        .iter()
        .copied()
        .filter(|m| Decimal::from(m.threshold) <= progress)
        .collect()
}

/// Orders goals for display: high priority first, ties kept in their
/// original order (stable sort).
pub fn sort_for_display(goals: &mut [SavingsGoal]) {
    goals.sort_by_key(|g| g.priority);
}

// ==================== Tests ====================
