//! Display strings for a date at a given granularity.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::granularity::Granularity;
use crate::period::{end_of_week, quarter_of, start_of_week};

/// Which weekday label set to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Labels {
    #[default]
    English,
    Japanese,
}

/// Short weekday label: `Mon`..`Sun`, or `月`..`日`.
pub fn weekday_label(date: NaiveDate, labels: Labels) -> &'static str {
    match labels {
        Labels::English => match date.weekday() {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        },
        Labels::Japanese => match date.weekday() {
            Weekday::Mon => "月",
            Weekday::Tue => "火",
            Weekday::Wed => "水",
            Weekday::Thu => "木",
            Weekday::Fri => "金",
            Weekday::Sat => "土",
            Weekday::Sun => "日",
        },
    }
}

/// Render `date` for display at `granularity`.
///
/// | granularity | example                         |
/// |-------------|---------------------------------|
/// | Day         | `2 January 2006 (Mon)`          |
/// | Week        | `02 – 08 January 2006 (1)`      |
/// | Month       | `January 2006`                  |
/// | Quarter     | `Q1 2006`                       |
/// | Year        | `2006`                          |
/// | Life        | empty                           |
///
/// The week form shows the Monday and Sunday day numbers, the month and year
/// of `date` itself, and the ISO week number.
///
/// ```
/// use chrono::NaiveDate;
/// use hinoki_dates::{date_string, Granularity};
///
/// let d = NaiveDate::from_ymd_opt(2024, 11, 21).unwrap();
/// assert_eq!(date_string(d, Granularity::Day), "21 November 2024 (Thu)");
/// assert_eq!(date_string(d, Granularity::Quarter), "Q4 2024");
/// ```
pub fn date_string(date: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Day => format!(
            "{} ({})",
            date.format("%-d %B %Y"),
            weekday_label(date, Labels::English)
        ),
        Granularity::Week => format!(
            "{:02} – {:02} {} ({})",
            start_of_week(date).day(),
            end_of_week(date).day(),
            date.format("%B %Y"),
            date.iso_week().week()
        ),
        Granularity::Month => date.format("%B %Y").to_string(),
        Granularity::Quarter => format!("Q{} {}", quarter_of(date), date.year()),
        Granularity::Year => date.format("%Y").to_string(),
        Granularity::Life => String::new(),
    }
}
