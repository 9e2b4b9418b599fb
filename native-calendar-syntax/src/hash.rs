use std::fmt::Display;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::Error;

/// Canonical key of a calendar date, written `year/month/day`.
///
/// The month is 1-based and no component is zero-padded, so that two keys
/// describe the same date iff their string representations are equal.
/// Negative years can be formatted but are rejected by the parser.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateHash {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateHash {
    /// Get the date described by this key, if it exists.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use native_calendar_syntax::DateHash;
    ///
    /// let leap = DateHash { year: 2024, month: 2, day: 29 };
    /// assert_eq!(leap.to_date(), NaiveDate::from_ymd_opt(2024, 2, 29));
    ///
    /// let invalid = DateHash { year: 2023, month: 2, day: 29 };
    /// assert_eq!(invalid.to_date(), None);
    /// ```
    pub fn to_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for DateHash {
    fn from(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month(), day: date.day() }
    }
}

impl Display for DateHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

impl FromStr for DateHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}
