//! Property-based integration tests for the derived-analytics layer.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use std::sync::Arc;

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use takatrack_core::budgets::Budget;
use takatrack_core::constants::TREND_MONTHS;
use takatrack_core::goals::{
    calculate_progress, milestones, GoalPriority, GoalRepository, GoalRepositoryTrait,
    NewSavingsGoal, SavingsGoal,
};
use takatrack_core::health::{compute_health_score, HealthWeights};
use takatrack_core::incomes::{income_stats, income_trend, Income};
use takatrack_core::recurring::{RecurringExpense, RecurringFrequency};
use takatrack_core::shared_expenses::{
    filter_ledger, total_viewer_owes, LedgerTab, Participant, ParticipantStatus, SharedExpense,
    SplitType,
};
use takatrack_core::store::MemoryKvStore;

const VIEWER: &str = "user-me";
const FRIEND: &str = "user-friend";

// =============================================================================
// Generators
// =============================================================================

/// Generates a money amount with two decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates a date within a few years of the reference date.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2026, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_income() -> impl Strategy<Value = Income> {
    (arb_amount(), arb_date()).prop_map(|(amount, date)| Income {
        id: format!("income-{}-{}", date, amount),
        source: "Salary".to_string(),
        amount,
        date,
        description: None,
        wallet_id: None,
    })
}

fn arb_incomes(max_count: usize) -> impl Strategy<Value = Vec<Income>> {
    proptest::collection::vec(arb_income(), 0..=max_count)
}

fn arb_budget() -> impl Strategy<Value = Budget> {
    (arb_amount(), arb_amount(), any::<bool>()).prop_map(|(amount, spent, over)| {
        let percentage_used = if amount > Decimal::ZERO {
            spent / amount * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
        Budget {
            id: format!("budget-{}-{}", amount, spent),
            category_name: "Category".to_string(),
            category_color: None,
            amount,
            spent,
            remaining: amount - spent,
            percentage_used,
            is_over_budget: over,
            month: 8,
            year: 2025,
        }
    })
}

fn arb_budgets(max_count: usize) -> impl Strategy<Value = Vec<Budget>> {
    proptest::collection::vec(arb_budget(), 0..=max_count)
}

fn arb_goal() -> impl Strategy<Value = SavingsGoal> {
    (arb_amount(), arb_amount(), arb_date()).prop_map(|(target, current, deadline)| SavingsGoal {
        id: format!("goal-{}-{}", target, current),
        name: "Goal".to_string(),
        target_amount: target,
        current_amount: current,
        deadline,
        category: "General".to_string(),
        priority: GoalPriority::Medium,
        contributions: vec![],
        created_at: chrono::Utc::now(),
    })
}

fn arb_goals(max_count: usize) -> impl Strategy<Value = Vec<SavingsGoal>> {
    proptest::collection::vec(arb_goal(), 0..=max_count)
}

fn arb_recurring(max_count: usize) -> impl Strategy<Value = Vec<RecurringExpense>> {
    proptest::collection::vec(
        (arb_amount(), arb_date()).prop_map(|(amount, due)| RecurringExpense {
            id: format!("rec-{}-{}", amount, due),
            description: "Subscription".to_string(),
            amount,
            frequency: RecurringFrequency::Monthly,
            next_due_date: due,
            category_name: None,
            is_active: true,
        }),
        0..=max_count,
    )
}

/// Generates a shared expense the viewer may or may not be part of.
fn arb_shared_expense() -> impl Strategy<Value = SharedExpense> {
    (
        arb_amount(),
        arb_date(),
        any::<bool>(), // viewer paid
        any::<bool>(), // viewer participates
        any::<bool>(), // viewer's share already paid
        any::<bool>(), // settled
    )
        .prop_map(|(total, date, viewer_paid, viewer_in, viewer_share_paid, settled)| {
            let payer = if viewer_paid { VIEWER } else { FRIEND };
            let half = total / Decimal::TWO;

            let mut participants = vec![Participant {
                id: "p-friend".to_string(),
                user_id: Some(FRIEND.to_string()),
                name: "Friend".to_string(),
                share_amount: half,
                is_paid: false,
                status: ParticipantStatus::Pending,
            }];
            if viewer_in {
                participants.push(Participant {
                    id: "p-viewer".to_string(),
                    user_id: Some(VIEWER.to_string()),
                    name: "Me".to_string(),
                    share_amount: half,
                    is_paid: viewer_share_paid,
                    status: if viewer_share_paid {
                        ParticipantStatus::Paid
                    } else {
                        ParticipantStatus::Pending
                    },
                });
            }

            SharedExpense {
                id: format!("se-{}-{}", total, date),
                title: "Dinner".to_string(),
                group_name: None,
                total_amount: total,
                paid_by_user_id: payer.to_string(),
                split_type: SplitType::Equal,
                is_settled: settled,
                participants,
                date,
            }
        })
}

fn arb_shared_expenses(max_count: usize) -> impl Strategy<Value = Vec<SharedExpense>> {
    proptest::collection::vec(arb_shared_expense(), 0..=max_count)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Feature: income-analytics, Property 1: Trend always covers the full window**
    ///
    /// The trend series has exactly one point per month of the window, ends
    /// at the reference month, and never drops empty months.
    #[test]
    fn prop_trend_covers_full_window(
        records in arb_incomes(50),
        today in arb_date(),
    ) {
        let trend = income_trend(&records, today);

        prop_assert_eq!(trend.len(), TREND_MONTHS as usize);
        for point in &trend {
            prop_assert!(
                point.amount >= Decimal::ZERO,
                "Bucketed amounts of non-negative records stay non-negative"
            );
        }
    }

    /// **Feature: income-analytics, Property 2: No baseline month means zero growth**
    ///
    /// When the previous month has no income, growth is reported as zero
    /// rather than dividing by zero.
    #[test]
    fn prop_growth_is_zero_without_baseline(
        this_month_amounts in proptest::collection::vec(arb_amount(), 0..10),
    ) {
        let today = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        let records: Vec<Income> = this_month_amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| Income {
                id: format!("income-{}", i),
                source: "Salary".to_string(),
                amount: *amount,
                date: NaiveDate::from_ymd_opt(2025, 8, 10).unwrap(),
                description: None,
                wallet_id: None,
            })
            .collect();

        let stats = income_stats(&records, today);

        prop_assert_eq!(stats.last_month, Decimal::ZERO);
        prop_assert_eq!(stats.growth, Decimal::ZERO);
    }

    /// **Feature: savings-goals, Property 3: Progress is always within [0, 100]**
    #[test]
    fn prop_progress_is_clamped(
        current in arb_amount(),
        target in arb_amount(),
    ) {
        let progress = calculate_progress(current, target);

        prop_assert!(progress >= Decimal::ZERO);
        prop_assert!(progress <= Decimal::ONE_HUNDRED);
    }

    /// **Feature: savings-goals, Property 4: Milestones accumulate monotonically**
    ///
    /// A goal that is further along never loses a milestone the earlier
    /// state had.
    #[test]
    fn prop_milestones_are_monotonic(
        progress_a in 0u32..=100,
        progress_b in 0u32..=100,
    ) {
        let (lower, higher) = if progress_a <= progress_b {
            (progress_a, progress_b)
        } else {
            (progress_b, progress_a)
        };

        let at_lower = milestones(Decimal::from(lower));
        let at_higher = milestones(Decimal::from(higher));

        prop_assert!(at_lower.len() <= at_higher.len());
        for (reached_early, reached_late) in at_lower.iter().zip(at_higher.iter()) {
            prop_assert_eq!(reached_early.threshold, reached_late.threshold);
        }
    }

    /// **Feature: savings-goals, Property 5: Contributions and totals move together**
    ///
    /// After any sequence of contributions, the goal's current amount is
    /// exactly the sum of its contribution list.
    #[test]
    fn prop_contributions_are_atomic(
        amounts in proptest::collection::vec(1i64..100_000, 0..20),
    ) {
        let repo = GoalRepository::new(Arc::new(MemoryKvStore::new()));
        let goal = repo
            .insert_new_goal(NewSavingsGoal {
                name: "Fund".to_string(),
                target_amount: Decimal::from(1_000_000u32),
                deadline: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
                category: "General".to_string(),
                priority: GoalPriority::High,
            })
            .unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let mut expected_total = Decimal::ZERO;
        for cents in &amounts {
            let amount = Decimal::new(*cents, 2);
            expected_total += amount;
            repo.add_contribution(&goal.id, amount, date).unwrap();
        }

        let stored = &repo.load_goals().unwrap()[0];
        prop_assert_eq!(stored.current_amount, expected_total);
        prop_assert_eq!(stored.contributions.len(), amounts.len());

        let listed_total: Decimal = stored.contributions.iter().map(|c| c.amount).sum();
        prop_assert_eq!(listed_total, expected_total);
    }

    /// **Feature: health-score, Property 6: Default weights keep the score in [50, 100]**
    #[test]
    fn prop_health_score_bounds(
        budgets in arb_budgets(20),
        recurring in arb_recurring(10),
        goals in arb_goals(10),
    ) {
        let score = compute_health_score(&budgets, &recurring, &goals, &HealthWeights::default());

        prop_assert!(score >= 50, "score {} fell below the base", score);
        prop_assert!(score <= 100, "score {} exceeded the cap", score);
    }

    /// **Feature: shared-ledger, Property 7: Debt directions partition the ledger**
    ///
    /// No expense appears in both directed tabs, and each directed tab is
    /// a subset of the unfiltered ledger.
    #[test]
    fn prop_ledger_tabs_partition(
        expenses in arb_shared_expenses(30),
    ) {
        let all = filter_ledger(&expenses, VIEWER, LedgerTab::All, None, None);
        let you_owe = filter_ledger(&expenses, VIEWER, LedgerTab::YouOwe, None, None);
        let owed_to_you = filter_ledger(&expenses, VIEWER, LedgerTab::OwedToYou, None, None);

        for expense in &you_owe {
            prop_assert!(owed_to_you.iter().all(|e| e.id != expense.id));
            prop_assert!(all.iter().any(|e| e.id == expense.id));
        }
        for expense in &owed_to_you {
            prop_assert!(all.iter().any(|e| e.id == expense.id));
        }

        prop_assert!(total_viewer_owes(&expenses, VIEWER) >= Decimal::ZERO);
    }
}
