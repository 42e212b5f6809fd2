use std::collections::HashMap;

use rust_decimal::Decimal;

use super::expenses_model::Expense;
use crate::budgets::CategorySpending;
use crate::constants::CATEGORY_BREAKDOWN_LIMIT;

const UNCATEGORIZED: &str = "Uncategorized";

/// Sums spend per category, highest first, capped at the breakdown limit.
///
/// Expenses without a category are pooled under "Uncategorized". The
/// backend is authoritative for budget aggregates; this breakdown only
/// exists for raw expense lists the backend does not aggregate.
pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategorySpending> {
    let mut by_category: HashMap<&str, Decimal> = HashMap::new();

    for expense in expenses {
        let category = expense.category_name.as_deref().unwrap_or(UNCATEGORIZED);
        *by_category.entry(category).or_insert(Decimal::ZERO) += expense.amount;
    }

    let mut breakdown: Vec<CategorySpending> = by_category
        .into_iter()
        .map(|(category_name, spent)| CategorySpending {
            category_name: category_name.to_string(),
            spent,
        })
        .collect();

    breakdown.sort_by(|a, b| b.spent.cmp(&a.spent));
    breakdown.truncate(CATEGORY_BREAKDOWN_LIMIT);
    breakdown
}

// ==================== Tests ====================
