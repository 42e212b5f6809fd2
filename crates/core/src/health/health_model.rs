/// Weights for the financial health heuristic.
///
/// The magnitudes are provisional, so they live in one place instead of
/// being scattered as literals. With the default weights the reachable
/// score range is [base, max_score] = [50, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthWeights {
    /// Starting score before any signal is applied.
    pub base: u32,
    /// Awarded when budgets exist and none is over its limit.
    pub no_over_budget: u32,
    /// Awarded when budgets exist and exactly one is over its limit.
    pub one_over_budget: u32,
    /// Consolation awarded when the user has no budgets at all.
    pub no_budgets: u32,
    /// Awarded when at least one active recurring bill is tracked.
    pub has_recurring: u32,
    /// Awarded when at least one savings goal exists.
    pub has_goals: u32,
    /// Additional award when any goal has money in it.
    pub has_funded_goal: u32,
    /// Hard ceiling for the final score.
    pub max_score: u32,
}

impl Default for HealthWeights {
    fn default() -> Self {
        HealthWeights {
            base: 50,
            no_over_budget: 20,
            one_over_budget: 10,
            no_budgets: 5,
            has_recurring: 10,
            has_goals: 10,
            has_funded_goal: 10,
            max_score: 100,
        }
    }
}
