//! Period boundaries and granularity-aware stepping.
//!
//! Weeks run Monday to Sunday (ISO 8601). Quarters are calendar-aligned
//! three-month blocks: Jan-Mar, Apr-Jun, Jul-Sep, Oct-Dec. All functions work
//! on plain calendar dates; no time-of-day is carried.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::granularity::Granularity;

// ── Week ────────────────────────────────────────────────────────────────────

/// The Monday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let since_monday = date.weekday().num_days_from_monday();
    date.checked_sub_days(Days::new(u64::from(since_monday)))
        .unwrap_or(NaiveDate::MIN)
}

/// The Sunday of the week containing `date`.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    let until_sunday = 6 - date.weekday().num_days_from_monday();
    date.checked_add_days(Days::new(u64::from(until_sunday)))
        .unwrap_or(NaiveDate::MAX)
}

// ── Quarter ─────────────────────────────────────────────────────────────────

/// The one-based quarter (1..=4) containing `date`.
pub fn quarter_of(date: NaiveDate) -> u32 {
    date.month0() / 3 + 1
}

/// First day of the zero-based quarter `index` (Q1 = 0) in `date`'s year.
///
/// Returns `None` for an index outside `0..=3`.
pub fn quarter_by_number(date: NaiveDate, index: u32) -> Option<NaiveDate> {
    if index > 3 {
        return None;
    }
    NaiveDate::from_ymd_opt(date.year(), index * 3 + 1, 1)
}

/// The first day of the quarter containing `date`.
pub fn start_of_quarter(date: NaiveDate) -> NaiveDate {
    quarter_by_number(date, quarter_of(date) - 1).unwrap_or(date)
}

/// The last day of the quarter containing `date` (Mar 31, Jun 30, Sep 30, Dec 31).
pub fn end_of_quarter(date: NaiveDate) -> NaiveDate {
    let (month, day) = match quarter_of(date) {
        1 => (3, 31),
        2 => (6, 30),
        3 => (9, 30),
        _ => (12, 31),
    };
    NaiveDate::from_ymd_opt(date.year(), month, day).unwrap_or(date)
}

// ── Month / year ────────────────────────────────────────────────────────────

pub(crate) fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub(crate) fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|first_next| first_next.pred_opt())
        .unwrap_or(date)
}

/// Inclusive first and last day of the period containing `date`.
///
/// `Life` has no bounds and yields `None`.
pub fn period_bounds(
    date: NaiveDate,
    granularity: Granularity,
) -> Option<(NaiveDate, NaiveDate)> {
    match granularity {
        Granularity::Day => Some((date, date)),
        Granularity::Week => Some((start_of_week(date), end_of_week(date))),
        Granularity::Month => Some((start_of_month(date), end_of_month(date))),
        Granularity::Quarter => Some((start_of_quarter(date), end_of_quarter(date))),
        Granularity::Year => Some((
            NaiveDate::from_ymd_opt(date.year(), 1, 1)?,
            NaiveDate::from_ymd_opt(date.year(), 12, 31)?,
        )),
        Granularity::Life => None,
    }
}

// ── Stepping ────────────────────────────────────────────────────────────────

/// Shift by a signed number of days, `None` outside chrono's range.
pub(crate) fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Shift by a signed number of months, clamping the day to the target
/// month's length (Jan 31 + 1 month = Feb 28/29).
pub(crate) fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let count = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(count)
    } else {
        date.checked_sub_months(count)
    }
}

/// Step `date` by `by` periods of `granularity`, or `None` if the result is
/// not representable.
pub fn checked_change_period(
    date: NaiveDate,
    granularity: Granularity,
    by: i32,
) -> Option<NaiveDate> {
    let by = i64::from(by);
    match granularity {
        Granularity::Day => shift_days(date, by),
        Granularity::Week => shift_days(date, 7 * by),
        Granularity::Month => shift_months(date, by),
        Granularity::Quarter => shift_months(date, 3 * by),
        Granularity::Year => shift_months(date, 12 * by),
        Granularity::Life => Some(date),
    }
}

/// Step `date` forward (positive `by`) or backward (negative `by`) by whole
/// periods of `granularity`. `Life` is a no-op.
///
/// Month-based steps clamp to the end of shorter months, so stepping there
/// and back can drift: Jan 31 + 1 month is Feb 29 2024, and Feb 29 - 1 month
/// is Jan 29. Results saturate at chrono's date range.
pub fn change_period(date: NaiveDate, granularity: Granularity, by: i32) -> NaiveDate {
    checked_change_period(date, granularity, by).unwrap_or(if by < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    })
}

/// ISO `YYYY-MM-DD` key used when persisting or querying goal dates.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
