use num_traits::Zero;
use rust_decimal::Decimal;

use super::debts_model::Debt;

/// How much of the principal has been repaid, in percent.
///
/// A zero principal is treated as fully repaid.
pub fn payoff_progress(debt: &Debt) -> Decimal {
    if debt.principal_amount <= Decimal::zero() {
        return Decimal::ONE_HUNDRED;
    }
    ((debt.principal_amount - debt.remaining_amount) / debt.principal_amount
        * Decimal::ONE_HUNDRED)
        .min(Decimal::ONE_HUNDRED)
}

// ==================== Tests ====================
