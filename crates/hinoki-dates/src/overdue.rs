//! Overdue predicate: has the whole period of a dated goal elapsed?

use chrono::{Datelike, NaiveDate};

use crate::granularity::Granularity;
use crate::period::{end_of_quarter, end_of_week, start_of_week};

/// Source of "today". The engine never reads the wall clock on its own.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Whether the period `date` falls in, at `granularity`, ended strictly
/// before `today`'s period.
///
/// A missing date or granularity is never overdue, and neither is `Life`.
///
/// ```
/// use chrono::NaiveDate;
/// use hinoki_dates::{is_overdue, Granularity};
///
/// let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
/// let march = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
/// assert!(is_overdue(Some(march), Some(Granularity::Month), today));
/// assert!(is_overdue(Some(march), Some(Granularity::Quarter), today));
/// assert!(!is_overdue(Some(march), Some(Granularity::Year), today));
/// ```
pub fn is_overdue(
    date: Option<NaiveDate>,
    granularity: Option<Granularity>,
    today: NaiveDate,
) -> bool {
    let (Some(date), Some(granularity)) = (date, granularity) else {
        return false;
    };

    match granularity {
        Granularity::Day => date < today,
        Granularity::Week => end_of_week(date) < start_of_week(today),
        Granularity::Month => (date.year(), date.month()) < (today.year(), today.month()),
        Granularity::Quarter => end_of_quarter(date) < today,
        Granularity::Year => date.year() < today.year(),
        Granularity::Life => false,
    }
}

/// [`is_overdue`] with "today" taken from `clock`.
pub fn is_overdue_with<C: Clock + ?Sized>(
    clock: &C,
    date: Option<NaiveDate>,
    granularity: Option<Granularity>,
) -> bool {
    is_overdue(date, granularity, clock.today())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        // Thursday
        ymd(2024, 11, 21)
    }

    const DATED: [Granularity; 5] = [
        Granularity::Day,
        Granularity::Week,
        Granularity::Month,
        Granularity::Quarter,
        Granularity::Year,
    ];

    #[test]
    fn test_missing_inputs_are_not_overdue() {
        assert!(!is_overdue(None, Some(Granularity::Day), today()));
        assert!(!is_overdue(Some(ymd(2000, 1, 1)), None, today()));
        assert!(!is_overdue(None, None, today()));
    }

    #[test]
    fn test_life_never_overdue() {
        assert!(!is_overdue(Some(ymd(2000, 1, 1)), Some(Granularity::Life), today()));
        assert!(!is_overdue(Some(ymd(2100, 1, 1)), Some(Granularity::Life), today()));
    }

    #[test]
    fn test_distant_past_is_overdue_for_every_dated_granularity() {
        for g in DATED {
            assert!(is_overdue(Some(ymd(2000, 1, 1)), Some(g), today()), "{g}");
        }
    }

    #[test]
    fn test_distant_future_is_not_overdue() {
        for g in DATED {
            assert!(!is_overdue(Some(ymd(2100, 1, 1)), Some(g), today()), "{g}");
        }
    }

    #[test]
    fn test_day_boundary() {
        let g = Some(Granularity::Day);
        assert!(is_overdue(Some(ymd(2024, 11, 20)), g, today()));
        assert!(!is_overdue(Some(today()), g, today()));
    }

    #[test]
    fn test_week_boundary() {
        let g = Some(Granularity::Week);
        // Monday of the current week is still open
        assert!(!is_overdue(Some(ymd(2024, 11, 18)), g, today()));
        // Sunday of the previous week has passed
        assert!(is_overdue(Some(ymd(2024, 11, 17)), g, today()));
    }

    #[test]
    fn test_month_boundary() {
        let g = Some(Granularity::Month);
        assert!(!is_overdue(Some(ymd(2024, 11, 1)), g, today()));
        assert!(is_overdue(Some(ymd(2024, 10, 31)), g, today()));
        // earlier month number in a later year is not overdue
        assert!(!is_overdue(Some(ymd(2025, 1, 1)), g, today()));
    }

    #[test]
    fn test_quarter_boundary() {
        let g = Some(Granularity::Quarter);
        assert!(!is_overdue(Some(ymd(2024, 10, 1)), g, today()));
        assert!(is_overdue(Some(ymd(2024, 9, 30)), g, today()));
        // last day of the quarter is not yet overdue on that day
        assert!(!is_overdue(Some(ymd(2024, 12, 1)), g, ymd(2024, 12, 31)));
        assert!(is_overdue(Some(ymd(2024, 12, 1)), g, ymd(2025, 1, 1)));
    }

    #[test]
    fn test_year_boundary() {
        let g = Some(Granularity::Year);
        assert!(!is_overdue(Some(ymd(2024, 1, 1)), g, today()));
        assert!(is_overdue(Some(ymd(2023, 12, 31)), g, today()));
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(ymd(2030, 6, 1));
        assert!(is_overdue_with(&clock, Some(ymd(2030, 5, 31)), Some(Granularity::Day)));
        assert!(!is_overdue_with(&clock, Some(ymd(2030, 6, 1)), Some(Granularity::Month)));
    }

    #[test]
    fn test_system_clock_far_dates() {
        let clock = SystemClock;
        assert!(is_overdue_with(&clock, Some(ymd(2000, 1, 1)), Some(Granularity::Day)));
        assert!(!is_overdue_with(&clock, Some(ymd(2100, 1, 1)), Some(Granularity::Day)));
    }
}
