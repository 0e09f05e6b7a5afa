//! The calendar period a goal date is associated with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// Unit of calendar period a date belongs to.
///
/// Variants are declared in the conventional display order
/// (Day < Week < Month < Quarter < Year < Life), which the derived `Ord` follows.
/// `Life` is a sentinel meaning "no specific period": dates paired with it are
/// never displayed and never expire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
    Quarter,
    Year,
    Life,
}

impl Granularity {
    /// Every granularity, smallest period first.
    pub const ALL: [Granularity; 6] = [
        Granularity::Day,
        Granularity::Week,
        Granularity::Month,
        Granularity::Quarter,
        Granularity::Year,
        Granularity::Life,
    ];

    /// Lowercase key under which goal stores persist the granularity.
    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Quarter => "quarter",
            Granularity::Year => "year",
            Granularity::Life => "life",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Granularity::Day => "Day",
            Granularity::Week => "Week",
            Granularity::Month => "Month",
            Granularity::Quarter => "Quarter",
            Granularity::Year => "Year",
            Granularity::Life => "Life",
        };
        f.write_str(label)
    }
}

impl FromStr for Granularity {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Granularity::ALL
            .into_iter()
            .find(|g| g.as_str() == key)
            .ok_or_else(|| DateError::UnknownGranularity(s.to_string()))
    }
}
