use rust_decimal::Decimal;

use super::health_model::HealthWeights;
use crate::budgets::Budget;
use crate::goals::SavingsGoal;
use crate::recurring::RecurringExpense;

/// Computes the heuristic health score from budget adherence, bill
/// tracking, and saving signals.
///
/// Deterministic in its inputs. The score is capped at
/// `weights.max_score`; there is no lower cap, but with the default
/// weights the minimum reachable score equals `weights.base`.
pub fn compute_health_score(
    budgets: &[Budget],
    recurring: &[RecurringExpense],
    goals: &[SavingsGoal],
    weights: &HealthWeights,
) -> u32 {
    let mut score = weights.base;

    if budgets.is_empty() {
        score += weights.no_budgets;
    } else {
        let over_budget_count = budgets.iter().filter(|b| b.is_over_budget).count();
        score += match over_budget_count {
            0 => weights.no_over_budget,
            1 => weights.one_over_budget,
            _ => 0,
        };
    }

    if !recurring.is_empty() {
        score += weights.has_recurring;
    }

    if !goals.is_empty() {
        score += weights.has_goals;
        if goals.iter().any(|g| g.current_amount > Decimal::ZERO) {
            score += weights.has_funded_goal;
        }
    }

    score.min(weights.max_score)
}

// ==================== Tests ====================
