//! Keyword resolver: classifies a single lowercase token.
//!
//! A token is one of a weekday name, a month name, a bare day-of-month
//! (1-31), a bare year (> 1900), a quarter label (`q1`..`q4`), or a relative
//! keyword such as `today` or `week`. Tokens are not unambiguous on their own
//! (`27` is a day, `2027` a year), so [`classify`] tries the classifiers in a
//! fixed order and the first match wins.

use chrono::Weekday;

// ── Direction ───────────────────────────────────────────────────────────────

/// The shift implied by an optional `next`/`prev` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Prev,
    #[default]
    Current,
    Next,
}

impl Direction {
    /// Recognise a direction prefix token: `next`/`n` or `prev`/`p`.
    pub fn from_prefix(token: &str) -> Option<Direction> {
        match token {
            "next" | "n" => Some(Direction::Next),
            "prev" | "p" => Some(Direction::Prev),
            _ => None,
        }
    }

    /// Signed step: -1, 0 or +1.
    pub fn step(self) -> i32 {
        match self {
            Direction::Prev => -1,
            Direction::Current => 0,
            Direction::Next => 1,
        }
    }
}

// ── Lookup tables ───────────────────────────────────────────────────────────

/// Relative keywords with a fixed shift rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relative {
    Today,
    Yesterday,
    Tomorrow,
    Weekend,
    Day,
    Week,
    Month,
    Quarter,
    Year,
    Life,
}

pub const WEEKDAYS: &[(&str, Weekday)] = &[
    ("monday", Weekday::Mon),
    ("mon", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("tue", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("wed", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("thu", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("fri", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sat", Weekday::Sat),
    ("sunday", Weekday::Sun),
    ("sun", Weekday::Sun),
];

/// Month names mapped to their 1-based number.
pub const MONTHS: &[(&str, u32)] = &[
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sep", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

/// Quarter labels mapped to their zero-based index (Q1 = 0).
pub const QUARTERS: &[(&str, u32)] = &[("q1", 0), ("q2", 1), ("q3", 2), ("q4", 3)];

pub const RELATIVE: &[(&str, Relative)] = &[
    ("today", Relative::Today),
    ("t", Relative::Today),
    ("yesterday", Relative::Yesterday),
    ("ytd", Relative::Yesterday),
    ("tomorrow", Relative::Tomorrow),
    ("tmrw", Relative::Tomorrow),
    ("weekend", Relative::Weekend),
    ("wknd", Relative::Weekend),
    ("day", Relative::Day),
    ("d", Relative::Day),
    ("week", Relative::Week),
    ("w", Relative::Week),
    ("month", Relative::Month),
    ("m", Relative::Month),
    ("quarter", Relative::Quarter),
    ("q", Relative::Quarter),
    ("year", Relative::Year),
    ("y", Relative::Year),
    ("life", Relative::Life),
    ("l", Relative::Life),
];

fn lookup<T: Copy>(table: &[(&str, T)], token: &str) -> Option<T> {
    table
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, value)| *value)
}

// ── Classifiers ─────────────────────────────────────────────────────────────

pub fn weekday(token: &str) -> Option<Weekday> {
    lookup(WEEKDAYS, token)
}

/// Month number (1-12) for a month name or abbreviation.
pub fn month(token: &str) -> Option<u32> {
    lookup(MONTHS, token)
}

/// Zero-based quarter index for `q1`..`q4`.
pub fn quarter(token: &str) -> Option<u32> {
    lookup(QUARTERS, token)
}

pub fn relative(token: &str) -> Option<Relative> {
    lookup(RELATIVE, token)
}

/// A bare day-of-month number in `[1, 31]`.
pub fn day_of_month(token: &str) -> Option<u32> {
    parse_number(token).filter(|n| (1..=31).contains(n))
}

/// A bare year number greater than 1900.
pub fn year(token: &str) -> Option<i32> {
    parse_number(token)
        .filter(|&n| n > 1900)
        .and_then(|n| i32::try_from(n).ok())
}

/// Unsigned decimal digits only; signs and whitespace are not numbers here.
fn parse_number(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

// ── Ordered classification ──────────────────────────────────────────────────

/// A single classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    DayOfMonth(u32),
    Weekday(Weekday),
    Month(u32),
    Year(i32),
    Quarter(u32),
    Relative(Relative),
}

/// Classify a lowercase, trimmed token.
///
/// Day-of-month is tried before year so small numbers are never read as
/// years; numbers in `32..=1900` match neither and are rejected.
pub fn classify(token: &str) -> Option<Token> {
    let found = day_of_month(token)
        .map(Token::DayOfMonth)
        .or_else(|| weekday(token).map(Token::Weekday))
        .or_else(|| month(token).map(Token::Month))
        .or_else(|| year(token).map(Token::Year))
        .or_else(|| quarter(token).map(Token::Quarter))
        .or_else(|| relative(token).map(Token::Relative));

    if found.is_none() {
        log::trace!("token '{token}' matched no classifier");
    }
    found
}
