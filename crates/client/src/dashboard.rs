//! Overview-page data loading. Issues the six backend fetches
//! concurrently and folds them into a snapshot; a single failed fetch
//! empties its own card instead of blanking the page.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use takatrack_core::budgets::Budget;
use takatrack_core::dashboard::{assemble_dashboard, DashboardInputs, DashboardSnapshot};
use takatrack_core::goals::SavingsGoal;
use takatrack_core::incomes::Income;
use takatrack_core::nudges::Nudge;
use takatrack_core::recurring::RecurringExpense;
use takatrack_core::shared_expenses::SharedExpenseSummary;
use takatrack_core::Result;

use crate::client::ApiClient;
use crate::fetch::FetchOutcome;
use crate::models::PagedExpenses;

/// Enough rows for the category breakdown without paging through history.
const RECENT_EXPENSES_LIMIT: u32 = 50;

/// The backend reads the overview page needs. Factored out so the
/// snapshot assembly can be exercised against a mock backend.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn incomes(&self) -> Result<Vec<Income>>;
    async fn current_budgets(&self) -> Result<Vec<Budget>>;
    async fn recent_expenses(&self) -> Result<PagedExpenses>;
    async fn active_recurring(&self) -> Result<Vec<RecurringExpense>>;
    async fn nudges(&self) -> Result<Vec<Nudge>>;
    async fn shared_summary(&self) -> Result<SharedExpenseSummary>;
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn incomes(&self) -> Result<Vec<Income>> {
        self.get_incomes().await
    }

    async fn current_budgets(&self) -> Result<Vec<Budget>> {
        self.get_current_budgets().await
    }

    async fn recent_expenses(&self) -> Result<PagedExpenses> {
        self.get_expenses(1, RECENT_EXPENSES_LIMIT).await
    }

    async fn active_recurring(&self) -> Result<Vec<RecurringExpense>> {
        self.get_active_recurring().await
    }

    async fn nudges(&self) -> Result<Vec<Nudge>> {
        self.get_nudges().await
    }

    async fn shared_summary(&self) -> Result<SharedExpenseSummary> {
        self.get_shared_expense_summary().await
    }
}

/// Loads and assembles the overview snapshot. Savings goals are local
/// only, so the caller passes them in from the goal repository.
pub struct DashboardService<A: DashboardApi> {
    api: Arc<A>,
}

impl<A: DashboardApi> DashboardService<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn load_snapshot(
        &self,
        goals: Vec<SavingsGoal>,
        today: NaiveDate,
    ) -> DashboardSnapshot {
        let (incomes, budgets, expenses, recurring, nudges, summary) = tokio::join!(
            self.api.incomes(),
            self.api.current_budgets(),
            self.api.recent_expenses(),
            self.api.active_recurring(),
            self.api.nudges(),
            self.api.shared_summary(),
        );

        let inputs = DashboardInputs {
            incomes: FetchOutcome::settle(incomes).value_or_default(),
            budgets: FetchOutcome::settle(budgets).value_or_default(),
            expenses: FetchOutcome::settle(expenses)
                .ok()
                .map(|page| page.expenses)
                .unwrap_or_default(),
            recurring: FetchOutcome::settle(recurring).value_or_default(),
            nudges: FetchOutcome::settle(nudges).value_or_default(),
            shared_summary: FetchOutcome::settle(summary).ok(),
            goals,
        };

        assemble_dashboard(&inputs, today)
    }
}

// ==================== Tests ====================
