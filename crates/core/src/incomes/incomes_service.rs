use chrono::NaiveDate;
use num_traits::Zero;
use rust_decimal::Decimal;

use super::incomes_model::{Income, IncomeStats, IncomeTrendPoint};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, TREND_MONTHS};
use crate::utils::time_utils::{
    distinct_month_count, months_back, same_year_month, short_month_name,
};

fn month_over_month_growth(current: Decimal, previous: Decimal) -> Decimal {
    if previous > Decimal::zero() {
        (current - previous) / previous * Decimal::ONE_HUNDRED
    } else {
        Decimal::zero()
    }
}

/// Derives the aggregate income figures relative to a reference date.
///
/// Pure function of `(records, today)`; an empty list yields all-zero
/// stats without division errors.
pub fn income_stats(records: &[Income], today: NaiveDate) -> IncomeStats {
    if records.is_empty() {
        return IncomeStats::empty();
    }

    let previous_month = months_back(today, 1);

    let mut total = Decimal::zero();
    let mut this_month = Decimal::zero();
    let mut last_month = Decimal::zero();

    for record in records {
        total += record.amount;
        if same_year_month(record.date, today) {
            this_month += record.amount;
        } else if same_year_month(record.date, previous_month) {
            last_month += record.amount;
        }
    }

    let growth = month_over_month_growth(this_month, last_month);

    let months_with_records = distinct_month_count(records.iter().map(|r| r.date));
    let avg_monthly = if months_with_records > 0 {
        total / Decimal::from(months_with_records as u64)
    } else {
        Decimal::zero()
    };

    IncomeStats {
        total: total.round_dp(DISPLAY_DECIMAL_PRECISION),
        this_month: this_month.round_dp(DISPLAY_DECIMAL_PRECISION),
        last_month: last_month.round_dp(DISPLAY_DECIMAL_PRECISION),
        growth: growth.round_dp(DISPLAY_DECIMAL_PRECISION),
        avg_monthly: avg_monthly.round_dp(DISPLAY_DECIMAL_PRECISION),
        count: records.len(),
    }
}

/// Builds the trailing six-month income trend, oldest bucket first.
///
/// Always yields exactly [`TREND_MONTHS`] points; months without records
/// appear as zero buckets so charts keep a fixed axis.
pub fn income_trend(records: &[Income], today: NaiveDate) -> Vec<IncomeTrendPoint> {
    (0..TREND_MONTHS)
        .rev()
        .map(|offset| {
            let bucket = months_back(today, offset);
            let amount: Decimal = records
                .iter()
                .filter(|r| same_year_month(r.date, bucket))
                .map(|r| r.amount)
                .sum();
            IncomeTrendPoint {
                month: short_month_name(bucket).to_string(),
                amount: amount.round_dp(DISPLAY_DECIMAL_PRECISION),
            }
        })
        .collect()
}

// ==================== Tests ====================
