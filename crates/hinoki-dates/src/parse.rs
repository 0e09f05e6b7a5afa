//! Date-expression parser: short tokens such as `"next fri"`, `"q2"`, `"27"`
//! or `"15 mar 2026"` to a concrete date plus its inferred granularity.
//!
//! # Grammar
//!
//! ```text
//! expr   := day month            -> that day this year            (Day)
//!         | month year           -> first of that month           (Month)
//!         | day month year       -> that exact date               (Day)
//!         | [dir] token
//! dir    := next | n | prev | p
//! token  := 1..31                -> that day of the month, dir months away    (Day)
//!         | weekday              -> upcoming / next / previous weekday        (Day)
//!         | month                -> this year's / next / previous month       (Month)
//!         | year (> 1900)        -> same month and day in that year           (Year)
//!         | q1..q4               -> that quarter, shifted dir quarters        (Quarter)
//!         | today|t yesterday|ytd tomorrow|tmrw weekend|wknd
//!         | day|d week|w month|m quarter|q year|y life|l
//! ```
//!
//! A direction prefix applies to exactly one following token; anything more
//! (`"next 15 march"`) is rejected rather than guessed at.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::error::{DateError, Result};
use crate::granularity::Granularity;
use crate::keyword::{self, Direction, Relative, Token};
use crate::period::{quarter_by_number, shift_days, shift_months};

/// A concrete date plus the granularity the expression implied.
///
/// For [`Granularity::Life`] the date is the reference date and carries no
/// meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedDate {
    pub date: NaiveDate,
    pub granularity: Granularity,
}

impl ResolvedDate {
    fn new(date: NaiveDate, granularity: Granularity) -> Self {
        Self { date, granularity }
    }
}

/// Resolve `raw` against the reference date `current`.
///
/// Input is trimmed, lowercased and split on whitespace. Two- and three-token
/// explicit dates are tried first; otherwise an optional direction prefix is
/// consumed and the remaining single token is classified in a fixed order
/// (day-of-month, weekday, month, year, quarter, relative keyword).
///
/// # Errors
///
/// Returns [`DateError::InvalidExpression`] carrying `raw` when nothing
/// matches, when a number is out of range (`"35"`), or when the date named
/// does not exist in the calendar (`"31 feb"`, `"31"` in a 30-day month).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hinoki_dates::{parse_date, Granularity};
///
/// let thu = NaiveDate::from_ymd_opt(2024, 11, 21).unwrap();
/// let r = parse_date(thu, "next fri").unwrap();
/// assert_eq!(r.date, NaiveDate::from_ymd_opt(2024, 11, 22).unwrap());
/// assert_eq!(r.granularity, Granularity::Day);
///
/// assert!(parse_date(thu, "35").is_err());
/// ```
pub fn parse_date(current: NaiveDate, raw: &str) -> Result<ResolvedDate> {
    let normalized = raw.trim().to_lowercase();
    let parts: Vec<&str> = normalized.split_whitespace().collect();

    let resolved = match parts.as_slice() {
        [first, second] if Direction::from_prefix(first).is_none() => {
            resolve_pair(current, first, second)
        }
        [day, month, year] => resolve_triple(day, month, year),
        [prefix, token] => {
            // from_prefix matched in the guard above
            let direction = Direction::from_prefix(prefix).unwrap_or_default();
            resolve_single(current, direction, token)
        }
        [token] => resolve_single(current, Direction::Current, token),
        _ => None,
    };

    match resolved {
        Some((resolved, rule)) => {
            log::debug!(
                "'{raw}' resolved by {rule} rule to {} ({})",
                resolved.date,
                resolved.granularity
            );
            Ok(resolved)
        }
        None => {
            log::debug!("'{raw}' is not a date expression");
            Err(DateError::InvalidExpression(raw.to_string()))
        }
    }
}

type Resolution = Option<(ResolvedDate, &'static str)>;

/// `day month` in the reference year, or `month year` at the first of the month.
fn resolve_pair(current: NaiveDate, first: &str, second: &str) -> Resolution {
    if let (Some(day), Some(month)) = (keyword::day_of_month(first), keyword::month(second)) {
        let date = NaiveDate::from_ymd_opt(current.year(), month, day)?;
        return Some((ResolvedDate::new(date, Granularity::Day), "day-month"));
    }

    if let (Some(month), Some(year)) = (keyword::month(first), keyword::year(second)) {
        let date = NaiveDate::from_ymd_opt(year, month, 1)?;
        return Some((ResolvedDate::new(date, Granularity::Month), "month-year"));
    }

    None
}

fn resolve_triple(day: &str, month: &str, year: &str) -> Resolution {
    let date = NaiveDate::from_ymd_opt(
        keyword::year(year)?,
        keyword::month(month)?,
        keyword::day_of_month(day)?,
    )?;
    Some((ResolvedDate::new(date, Granularity::Day), "day-month-year"))
}

fn resolve_single(current: NaiveDate, direction: Direction, token: &str) -> Resolution {
    let step = i64::from(direction.step());

    let (date, granularity, rule) = match keyword::classify(token)? {
        Token::DayOfMonth(day) => {
            let month = shift_months(current, step)?;
            (month.with_day(day)?, Granularity::Day, "day-of-month")
        }
        Token::Weekday(target) => (
            weekday_occurrence(current, target, direction)?,
            Granularity::Day,
            "weekday",
        ),
        Token::Month(target) => (
            month_occurrence(current, target, direction)?,
            Granularity::Month,
            "month",
        ),
        Token::Year(year) => {
            let years = i64::from(year) - i64::from(current.year());
            (shift_months(current, years * 12)?, Granularity::Year, "year")
        }
        Token::Quarter(index) => {
            let start = quarter_by_number(current, index)?;
            (shift_months(start, 3 * step)?, Granularity::Quarter, "quarter")
        }
        Token::Relative(relative) => {
            let (date, granularity) = resolve_relative(current, relative, step)?;
            (date, granularity, "relative")
        }
    };

    Some((ResolvedDate::new(date, granularity), rule))
}

fn resolve_relative(
    current: NaiveDate,
    relative: Relative,
    step: i64,
) -> Option<(NaiveDate, Granularity)> {
    Some(match relative {
        Relative::Today => (current, Granularity::Day),
        Relative::Yesterday => (shift_days(current, -1)?, Granularity::Day),
        Relative::Tomorrow => (shift_days(current, 1)?, Granularity::Day),
        Relative::Day => (shift_days(current, 1 + step)?, Granularity::Day),
        Relative::Weekend => {
            let to_saturday = 6 - i64::from(current.weekday().num_days_from_sunday());
            (shift_days(current, to_saturday + 7 * step)?, Granularity::Day)
        }
        Relative::Week => (shift_days(current, 7 * step)?, Granularity::Week),
        Relative::Month => (shift_months(current, step)?, Granularity::Month),
        Relative::Quarter => (shift_months(current, 3 * step)?, Granularity::Quarter),
        Relative::Year => (shift_months(current, 12 * step)?, Granularity::Year),
        Relative::Life => (current, Granularity::Life),
    })
}

/// Occurrence of `target` relative to `current`.
///
/// Without a direction, and with `next`, this is the upcoming occurrence,
/// today included. `prev` is the nearest occurrence strictly before today,
/// so from a Monday "prev mon" moves back a full week.
fn weekday_occurrence(
    current: NaiveDate,
    target: Weekday,
    direction: Direction,
) -> Option<NaiveDate> {
    let from = i64::from(current.weekday().num_days_from_monday());
    let to = i64::from(target.num_days_from_monday());
    let ahead = (to - from).rem_euclid(7);
    let behind = (from - to).rem_euclid(7);

    let offset = match direction {
        Direction::Current | Direction::Next => ahead,
        Direction::Prev if behind == 0 => -7,
        Direction::Prev => -behind,
    };
    shift_days(current, offset)
}

/// Occurrence of month `target` (1-12) relative to `current`, keeping the day
/// of month where the target month is long enough.
///
/// Without a direction the month is taken in the current year. `next` and
/// `prev` move strictly forward or backward, a full year when already in the
/// target month.
fn month_occurrence(
    current: NaiveDate,
    target: u32,
    direction: Direction,
) -> Option<NaiveDate> {
    let from = i64::from(current.month());
    let to = i64::from(target);
    let ahead = (to - from).rem_euclid(12);
    let behind = (from - to).rem_euclid(12);

    let offset = match direction {
        Direction::Current => to - from,
        Direction::Next if ahead == 0 => 12,
        Direction::Next => ahead,
        Direction::Prev if behind == 0 => -12,
        Direction::Prev => -behind,
    };
    shift_months(current, offset)
}
