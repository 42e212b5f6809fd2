use chrono::{Datelike, Months, NaiveDate};
use std::collections::HashSet;

/// Short English month names, indexed by zero-based month.
pub const SHORT_MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Returns the date shifted back by the given number of calendar months.
///
/// This is the single source of truth for walking trend buckets backwards
/// from a reference date. Day-of-month is clamped by the calendar rules of
/// the target month (e.g. Mar 31 minus one month is Feb 28/29).
pub fn months_back(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months)).unwrap_or(date)
}

/// Short English name of the month of the given date ("Jan".."Dec").
pub fn short_month_name(date: NaiveDate) -> &'static str {
    SHORT_MONTH_NAMES[date.month0() as usize]
}

/// Formats a (year, month) pair as a zero-padded sort key, e.g. "2025-03".
///
/// Keys built this way order chronologically under plain string sorting.
pub fn year_month_key(year: i32, month: u32) -> String {
    format!("{}-{:02}", year, month)
}

/// True when both dates fall in the same calendar month of the same year.
pub fn same_year_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Counts the distinct (year, month) pairs among the given dates.
pub fn distinct_month_count<I>(dates: I) -> usize
where
    I: IntoIterator<Item = NaiveDate>,
{
    dates
        .into_iter()
        .map(|d| (d.year(), d.month()))
        .collect::<HashSet<_>>()
        .len()
}
