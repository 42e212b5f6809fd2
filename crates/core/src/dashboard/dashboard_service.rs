use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::dashboard_model::DashboardSnapshot;
use crate::budgets::{budget_alerts, Budget};
use crate::expenses::{category_breakdown, Expense};
use crate::goals::SavingsGoal;
use crate::health::{compute_health_score, HealthWeights};
use crate::incomes::{income_stats, Income};
use crate::nudges::{unread_count, Nudge};
use crate::recurring::RecurringExpense;
use crate::shared_expenses::SharedExpenseSummary;

/// Raw lists feeding the overview page, one per fetch. A fetch that
/// failed leaves its field empty and only degrades its own card.
#[derive(Debug, Clone, Default)]
pub struct DashboardInputs {
    pub incomes: Vec<Income>,
    pub budgets: Vec<Budget>,
    pub expenses: Vec<Expense>,
    pub recurring: Vec<RecurringExpense>,
    pub goals: Vec<SavingsGoal>,
    pub nudges: Vec<Nudge>,
    pub shared_summary: Option<SharedExpenseSummary>,
}

/// Derives the full overview snapshot. Pure in `(inputs, today)`.
pub fn assemble_dashboard(inputs: &DashboardInputs, today: NaiveDate) -> DashboardSnapshot {
    DashboardSnapshot {
        income: income_stats(&inputs.incomes, today),
        health_score: compute_health_score(
            &inputs.budgets,
            &inputs.recurring,
            &inputs.goals,
            &HealthWeights::default(),
        ),
        budget_alerts: budget_alerts(&inputs.budgets),
        category_breakdown: category_breakdown(&inputs.expenses),
        unread_nudges: unread_count(&inputs.nudges),
        net_shared_balance: inputs
            .shared_summary
            .as_ref()
            .map(|s| s.net_balance)
            .unwrap_or(Decimal::ZERO),
    }
}

// ==================== Tests ====================
