//! Typed endpoint methods, one per backend route the pages call.

use takatrack_core::budgets::{Budget, BudgetAnalytics};
use takatrack_core::debts::{Debt, DebtStats};
use takatrack_core::incomes::Income;
use takatrack_core::nudges::Nudge;
use takatrack_core::predictions::{AccuracyStats, Prediction};
use takatrack_core::receipts::Receipt;
use takatrack_core::recurring::RecurringExpense;
use takatrack_core::shared_expenses::{SharedExpense, SharedExpenseSummary};
use takatrack_core::tax::{TaxExport, TaxExportRequest, TaxPreview};
use takatrack_core::Result;

use crate::client::ApiClient;
use crate::models::{MonthlySummary, PagedExpenses, SpendingTrendPoint, YearlySummary};

impl ApiClient {
    // ==================== Incomes & Expenses ====================

    pub async fn get_incomes(&self) -> Result<Vec<Income>> {
        self.get("/incomes").await
    }

    pub async fn get_expenses(&self, page: u32, limit: u32) -> Result<PagedExpenses> {
        self.get(&format!("/expenses?page={}&limit={}", page, limit))
            .await
    }

    // ==================== Budgets ====================

    pub async fn get_current_budgets(&self) -> Result<Vec<Budget>> {
        self.get("/budgets/current").await
    }

    pub async fn get_budget_analytics(&self) -> Result<BudgetAnalytics> {
        self.get("/budgets/analytics").await
    }

    /// Per-month budget rows for the trailing window, ready for
    /// [`takatrack_core::budgets::budget_history`].
    pub async fn get_budget_history(&self, months: u32) -> Result<Vec<Budget>> {
        self.get(&format!("/budgets/history?months={}", months))
            .await
    }

    // ==================== Debts ====================

    pub async fn get_debts(&self) -> Result<Vec<Debt>> {
        self.get("/debts").await
    }

    pub async fn get_debt_stats(&self) -> Result<DebtStats> {
        self.get("/debts/stats").await
    }

    // ==================== Shared Expenses ====================

    pub async fn get_shared_expenses(&self) -> Result<Vec<SharedExpense>> {
        self.get("/shared-expenses").await
    }

    pub async fn get_shared_expense_summary(&self) -> Result<SharedExpenseSummary> {
        self.get("/shared-expenses/summary").await
    }

    pub async fn mark_participant_paid(
        &self,
        expense_id: &str,
        participant_id: &str,
    ) -> Result<()> {
        self.put_empty(&format!(
            "/shared-expenses/{}/participants/{}/pay",
            expense_id, participant_id
        ))
        .await
    }

    pub async fn settle_shared_expense(&self, expense_id: &str) -> Result<()> {
        self.post_empty(&format!("/shared-expenses/{}/settle", expense_id))
            .await
    }

    pub async fn delete_shared_expense(&self, expense_id: &str) -> Result<()> {
        self.delete(&format!("/shared-expenses/{}", expense_id)).await
    }

    // ==================== Predictions ====================

    pub async fn get_predictions(&self) -> Result<Vec<Prediction>> {
        self.get("/predictions").await
    }

    pub async fn get_prediction_accuracy(&self) -> Result<AccuracyStats> {
        self.get("/predictions/accuracy").await
    }

    // ==================== Receipts & Nudges ====================

    pub async fn get_receipts(&self) -> Result<Vec<Receipt>> {
        self.get("/receipts").await
    }

    pub async fn get_nudges(&self) -> Result<Vec<Nudge>> {
        self.get("/nudges").await
    }

    pub async fn mark_nudge_read(&self, nudge_id: &str) -> Result<()> {
        self.post_empty(&format!("/nudges/{}/read", nudge_id)).await
    }

    // ==================== Recurring ====================

    pub async fn get_active_recurring(&self) -> Result<Vec<RecurringExpense>> {
        self.get("/recurring-expenses/active").await
    }

    // ==================== Analytics ====================

    pub async fn get_monthly_summary(&self, year: i32, month: u32) -> Result<MonthlySummary> {
        self.get(&format!("/analytics/monthly?year={}&month={}", year, month))
            .await
    }

    pub async fn get_yearly_summary(&self, year: i32) -> Result<YearlySummary> {
        self.get(&format!("/analytics/yearly?year={}", year)).await
    }

    pub async fn get_spending_trends(&self, months: u32) -> Result<Vec<SpendingTrendPoint>> {
        self.get(&format!("/analytics/trends?months={}", months))
            .await
    }

    // ==================== Tax Exports ====================

    pub async fn get_tax_exports(&self) -> Result<Vec<TaxExport>> {
        self.get("/tax-exports").await
    }

    pub async fn get_tax_preview(&self, tax_year: i32) -> Result<TaxPreview> {
        self.get(&format!("/tax-exports/preview?taxYear={}", tax_year))
            .await
    }

    pub async fn generate_tax_export(&self, tax_year: i32) -> Result<TaxExport> {
        self.post("/tax-exports/generate", &TaxExportRequest { tax_year })
            .await
    }
}
