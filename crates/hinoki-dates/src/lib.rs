//! # hinoki-dates
//!
//! Date-expression resolution and timeframe arithmetic for goal planning.
//!
//! Goals in a planner belong to a period: a day, a week, a month, a quarter,
//! a year, or "life" (no date at all). This crate turns the short expressions
//! people type when filing a goal (`"fri"`, `"next month"`, `"q3"`, `"27"`,
//! `"15 mar 2026"`) into a concrete date plus that period, and provides the
//! calendar arithmetic the rest of a planner needs around such pairs.
//!
//! Every function is pure: the caller supplies the reference date, and
//! nothing reads the system clock except [`SystemClock`].
//!
//! ## Modules
//!
//! - [`keyword`] — token classification (weekday, month, day, year, quarter, keyword)
//! - [`parse`] — [`parse_date`]: expression → date + granularity
//! - [`period`] — week/quarter boundaries, period bounds, [`change_period`]
//! - [`format`] — [`date_string`] display per granularity
//! - [`overdue`] — [`is_overdue`] predicate and the [`Clock`] seam
//! - [`granularity`] — the [`Granularity`] enum and its storage codec
//! - [`error`] — Error types

pub mod error;
pub mod format;
pub mod granularity;
pub mod keyword;
pub mod overdue;
pub mod parse;
pub mod period;

pub use error::DateError;
pub use format::{date_string, weekday_label, Labels};
pub use granularity::Granularity;
pub use keyword::Direction;
pub use overdue::{is_overdue, is_overdue_with, Clock, FixedClock, SystemClock};
pub use parse::{parse_date, ResolvedDate};
pub use period::{
    change_period, checked_change_period, date_key, end_of_quarter, end_of_week, period_bounds,
    quarter_by_number, quarter_of, start_of_quarter, start_of_week,
};
