//! Text and JSON rendering of command results.

use chrono::NaiveDate;
use hinoki_dates::{date_key, date_string, Granularity, ResolvedDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_flags(json_flag: bool, json_config: bool) -> Self {
        if json_flag || json_config {
            Self::Json
        } else {
            Self::Text
        }
    }
}

#[derive(Debug, Serialize)]
struct ParsedOutput<'a> {
    input: &'a str,
    date: NaiveDate,
    granularity: Granularity,
    display: String,
}

#[derive(Debug, Serialize)]
struct RangeOutput {
    granularity: Granularity,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct OverdueOutput {
    date: NaiveDate,
    granularity: Granularity,
    today: NaiveDate,
    overdue: bool,
}

#[derive(Debug, Serialize)]
struct DateOutput {
    date: NaiveDate,
    granularity: Granularity,
    display: String,
}

fn to_json<T: Serialize>(value: &T) -> String {
    // Serializing these plain structs cannot fail.
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// `2024-11-22  day  22 November 2024 (Fri)`; the display column is
/// omitted for `life`.
pub fn parsed(input: &str, resolved: ResolvedDate, format: OutputFormat) -> String {
    let display = date_string(resolved.date, resolved.granularity);
    match format {
        OutputFormat::Json => to_json(&ParsedOutput {
            input,
            date: resolved.date,
            granularity: resolved.granularity,
            display,
        }),
        OutputFormat::Text if display.is_empty() => {
            format!("{}  {}", date_key(resolved.date), resolved.granularity.as_str())
        }
        OutputFormat::Text => format!(
            "{}  {}  {}",
            date_key(resolved.date),
            resolved.granularity.as_str(),
            display
        ),
    }
}

pub fn shown(date: NaiveDate, granularity: Granularity, format: OutputFormat) -> String {
    let display = date_string(date, granularity);
    match format {
        OutputFormat::Json => to_json(&DateOutput {
            date,
            granularity,
            display,
        }),
        OutputFormat::Text => display,
    }
}

pub fn stepped(date: NaiveDate, granularity: Granularity, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(&DateOutput {
            date,
            granularity,
            display: date_string(date, granularity),
        }),
        OutputFormat::Text => date_key(date),
    }
}

pub fn range(
    granularity: Granularity,
    bounds: Option<(NaiveDate, NaiveDate)>,
    format: OutputFormat,
) -> String {
    match (format, bounds) {
        (OutputFormat::Json, _) => to_json(&RangeOutput {
            granularity,
            start: bounds.map(|(start, _)| start),
            end: bounds.map(|(_, end)| end),
        }),
        (OutputFormat::Text, Some((start, end))) => {
            format!("{} {}", date_key(start), date_key(end))
        }
        (OutputFormat::Text, None) => "unbounded".to_string(),
    }
}

pub fn overdue(
    date: NaiveDate,
    granularity: Granularity,
    today: NaiveDate,
    overdue: bool,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Json => to_json(&OverdueOutput {
            date,
            granularity,
            today,
            overdue,
        }),
        OutputFormat::Text => overdue.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Text);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Json);
    }

    #[test]
    fn test_parsed_text() {
        let r = ResolvedDate {
            date: ymd(2024, 11, 22),
            granularity: Granularity::Day,
        };
        assert_eq!(
            parsed("fri", r, OutputFormat::Text),
            "2024-11-22  day  22 November 2024 (Fri)"
        );
    }

    #[test]
    fn test_parsed_life_text_omits_display() {
        let r = ResolvedDate {
            date: ymd(2024, 11, 21),
            granularity: Granularity::Life,
        };
        assert_eq!(parsed("life", r, OutputFormat::Text), "2024-11-21  life");
    }

    #[test]
    fn test_parsed_json() {
        let r = ResolvedDate {
            date: ymd(2024, 4, 1),
            granularity: Granularity::Quarter,
        };
        let v: serde_json::Value =
            serde_json::from_str(&parsed("q2", r, OutputFormat::Json)).unwrap();
        assert_eq!(v["input"], "q2");
        assert_eq!(v["date"], "2024-04-01");
        assert_eq!(v["granularity"], "quarter");
        assert_eq!(v["display"], "Q2 2024");
    }

    #[test]
    fn test_range_text_and_json() {
        let bounds = Some((ymd(2024, 11, 18), ymd(2024, 11, 24)));
        assert_eq!(
            range(Granularity::Week, bounds, OutputFormat::Text),
            "2024-11-18 2024-11-24"
        );
        assert_eq!(range(Granularity::Life, None, OutputFormat::Text), "unbounded");

        let v: serde_json::Value =
            serde_json::from_str(&range(Granularity::Life, None, OutputFormat::Json)).unwrap();
        assert!(v["start"].is_null());
        assert!(v["end"].is_null());
    }

    #[test]
    fn test_overdue_text() {
        let d = ymd(2024, 1, 1);
        assert_eq!(
            overdue(d, Granularity::Day, ymd(2024, 11, 21), true, OutputFormat::Text),
            "true"
        );
    }
}
