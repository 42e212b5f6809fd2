use std::collections::HashMap;

use rust_decimal::Decimal;

use super::budgets_model::{Budget, BudgetAlert, BudgetHistoryPoint, BudgetStatus};
use crate::constants::{DASHBOARD_ALERT_LIMIT, NEAR_LIMIT_THRESHOLD};
use crate::utils::time_utils::year_month_key;

/// Classifies a budget against the near-limit threshold.
pub fn budget_status(budget: &Budget) -> BudgetStatus {
    if budget.is_over_budget {
        BudgetStatus::OverBudget
    } else if budget.percentage_used >= Decimal::from(NEAR_LIMIT_THRESHOLD) {
        BudgetStatus::NearLimit
    } else {
        BudgetStatus::OnTrack
    }
}

/// Clamps a percent-used figure to 100 for progress bars.
///
/// The raw value stays available for text display; only the bar is capped.
pub fn display_progress(percentage_used: Decimal) -> Decimal {
    percentage_used.min(Decimal::ONE_HUNDRED)
}

/// Selects the budgets worth flagging on the dashboard: near their limit
/// or already over it, capped at the alert limit in input order.
pub fn budget_alerts(budgets: &[Budget]) -> Vec<BudgetAlert> {
    budgets
        .iter()
        .filter(|b| budget_status(b) != BudgetStatus::OnTrack)
        .take(DASHBOARD_ALERT_LIMIT)
        .map(|b| BudgetAlert {
            budget_id: b.id.clone(),
            category_name: b.category_name.clone(),
            percentage_used: b.percentage_used,
            is_over_budget: b.is_over_budget,
        })
        .collect()
}

/// Aggregates per-category budget rows into one point per calendar month,
/// summing spend and limit, ordered oldest first.
pub fn budget_history(entries: &[Budget]) -> Vec<BudgetHistoryPoint> {
    let mut by_month: HashMap<String, (Decimal, Decimal)> = HashMap::new();

    for entry in entries {
        let key = year_month_key(entry.year, entry.month);
        let bucket = by_month.entry(key).or_insert((Decimal::ZERO, Decimal::ZERO));
        bucket.0 += entry.spent;
        bucket.1 += entry.amount;
    }

    let mut points: Vec<BudgetHistoryPoint> = by_month
        .into_iter()
        .map(|(month, (spent, budget))| BudgetHistoryPoint {
            month,
            spent,
            budget,
        })
        .collect();
    points.sort_by(|a, b| a.month.cmp(&b.month));
    points
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn budget(
        id: &str,
        category: &str,
        amount: Decimal,
        spent: Decimal,
        month: u32,
        year: i32,
    ) -> Budget {
        let remaining = amount - spent;
        let percentage_used = if amount > Decimal::ZERO {
            spent / amount * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
        Budget {
            id: id.to_string(),
            category_name: category.to_string(),
            category_color: None,
            amount,
            spent,
            remaining,
            percentage_used,
            is_over_budget: spent > amount,
            month,
            year,
        }
    }

    // ==================== Status Tests ====================

    #[test]
    fn test_status_on_track_below_threshold() {
        let b = budget("1", "Food", dec!(500), dec!(100), 2, 2025);
        assert_eq!(budget_status(&b), BudgetStatus::OnTrack);
    }

    #[test]
    fn test_status_near_limit_at_eighty_percent() {
        let b = budget("1", "Food", dec!(500), dec!(400), 2, 2025);
        assert_eq!(budget_status(&b), BudgetStatus::NearLimit);
    }

    #[test]
    fn test_status_over_budget() {
        let b = budget("1", "Food", dec!(500), dec!(600), 2, 2025);
        assert_eq!(budget_status(&b), BudgetStatus::OverBudget);
        assert_eq!(b.remaining, dec!(-100));
    }

    #[test]
    fn test_display_progress_clamps_to_one_hundred() {
        assert_eq!(display_progress(dec!(120)), dec!(100));
        assert_eq!(display_progress(dec!(45.5)), dec!(45.5));
    }

    // ==================== Alert Tests ====================

    #[test]
    fn test_alerts_pick_flagged_budgets_capped_at_three() {
        let budgets = vec![
            budget("1", "Food", dec!(500), dec!(450), 2, 2025),
            budget("2", "Rent", dec!(1000), dec!(100), 2, 2025),
            budget("3", "Fun", dec!(100), dec!(150), 2, 2025),
            budget("4", "Gas", dec!(200), dec!(190), 2, 2025),
            budget("5", "Gym", dec!(50), dec!(60), 2, 2025),
        ];
        let alerts = budget_alerts(&budgets);

        assert_eq!(alerts.len(), 3);
        let names: Vec<&str> = alerts.iter().map(|a| a.category_name.as_str()).collect();
        assert_eq!(names, vec!["Food", "Fun", "Gas"]);
    }

    #[test]
    fn test_alerts_empty_when_all_on_track() {
        let budgets = vec![budget("1", "Food", dec!(500), dec!(100), 2, 2025)];
        assert!(budget_alerts(&budgets).is_empty());
    }

    // ==================== History Tests ====================

    #[test]
    fn test_history_groups_by_month_and_sorts() {
        let entries = vec![
            budget("1", "Food", dec!(500), dec!(400), 2, 2025),
            budget("2", "Rent", dec!(1000), dec!(1000), 2, 2025),
            budget("3", "Food", dec!(500), dec!(300), 12, 2024),
        ];
        let history = budget_history(&entries);

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].month, "2024-12");
        assert_eq!(history[0].spent, dec!(300));
        assert_eq!(history[0].budget, dec!(500));
        assert_eq!(history[1].month, "2025-02");
        assert_eq!(history[1].spent, dec!(1400));
        assert_eq!(history[1].budget, dec!(1500));
    }
}
