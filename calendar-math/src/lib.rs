#![doc = include_str!("../README.md")]

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Month, NaiveDate, Weekday};

// --
// -- Month lengths
// --

/// Check if a year is a leap year in the Gregorian calendar.
///
/// ```
/// use calendar_math::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// ```
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, `month` being 1-based.
///
/// ```
/// use calendar_math::days_in_month;
///
/// assert_eq!(days_in_month(2023, 1), 31);
/// assert_eq!(days_in_month(2023, 2), 28);
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2024, 4), 30);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    assert!((1..=12).contains(&month));

    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// --
// -- Week days
// --

/// The day displayed in the first column of a week.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum FirstWeekDay {
    #[default]
    Sunday,
    Monday,
}

impl FirstWeekDay {
    /// Index of a weekday in a week starting with this day.
    ///
    /// ```
    /// use calendar_math::FirstWeekDay;
    /// use chrono::Weekday;
    ///
    /// assert_eq!(FirstWeekDay::Sunday.weekday_num(Weekday::Sun), 0);
    /// assert_eq!(FirstWeekDay::Monday.weekday_num(Weekday::Sun), 6);
    /// assert_eq!(FirstWeekDay::Monday.weekday_num(Weekday::Thu), 3);
    /// ```
    pub fn weekday_num(self, weekday: Weekday) -> u32 {
        normalize_weekday(self, weekday.num_days_from_sunday())
    }

    /// The weekday displayed in the first column.
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }
}

impl fmt::Display for FirstWeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sunday => write!(f, "sunday"),
            Self::Monday => write!(f, "monday"),
        }
    }
}

impl FromStr for FirstWeekDay {
    type Err = UnknownFirstWeekDay;

    /// ```
    /// use calendar_math::FirstWeekDay;
    ///
    /// assert_eq!("monday".parse(), Ok(FirstWeekDay::Monday));
    /// assert_eq!("Sunday".parse(), Ok(FirstWeekDay::Sunday));
    /// assert!("friday".parse::<FirstWeekDay>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("sunday") {
            Ok(Self::Sunday)
        } else if s.eq_ignore_ascii_case("monday") {
            Ok(Self::Monday)
        } else {
            Err(UnknownFirstWeekDay(s.to_string()))
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnknownFirstWeekDay(pub String);

impl fmt::Display for UnknownFirstWeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown first day of week `{}`", self.0)
    }
}

impl std::error::Error for UnknownFirstWeekDay {}

/// Map a platform weekday index (0 = Sunday .. 6 = Saturday) to its column
/// in a week starting with `first`.
///
/// ```
/// use calendar_math::{normalize_weekday, FirstWeekDay};
///
/// assert_eq!(normalize_weekday(FirstWeekDay::Sunday, 4), 4);
/// assert_eq!(normalize_weekday(FirstWeekDay::Monday, 4), 3);
/// assert_eq!(normalize_weekday(FirstWeekDay::Monday, 0), 6);
/// ```
pub const fn normalize_weekday(first: FirstWeekDay, platform_index: u32) -> u32 {
    match first {
        FirstWeekDay::Sunday => platform_index % 7,
        FirstWeekDay::Monday => (platform_index + 6) % 7,
    }
}

// --
// -- Date components with overflow
// --

/// Build a date from components that may be out of their natural range.
///
/// A month outside of `0..12` (0-based) carries into years and a day outside
/// of the month rolls into the surrounding months, `day = 0` being the last
/// day of the previous month. Return `None` only if the result can't be
/// represented.
///
/// ```
/// use calendar_math::compose_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(compose_date(2023, 1, 31), NaiveDate::from_ymd_opt(2023, 3, 3));
/// assert_eq!(compose_date(2023, -1, 15), NaiveDate::from_ymd_opt(2022, 12, 15));
/// assert_eq!(compose_date(2023, 12, 1), NaiveDate::from_ymd_opt(2024, 1, 1));
/// assert_eq!(compose_date(2024, 2, 0), NaiveDate::from_ymd_opt(2024, 2, 29));
/// ```
pub fn compose_date(year: i32, month0: i32, day: i32) -> Option<NaiveDate> {
    let month0 = i64::from(month0);
    let year = i32::try_from(i64::from(year) + month0.div_euclid(12)).ok()?;
    let month = u32::try_from(month0.rem_euclid(12)).ok()? + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = i64::from(day) - 1;

    if offset >= 0 {
        first.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        first.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
}

/// Replace the day of the month, rolling over if the month is too short.
///
/// ```
/// use calendar_math::with_day;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2023, 2, 10).unwrap();
/// assert_eq!(with_day(date, 15), NaiveDate::from_ymd_opt(2023, 2, 15));
/// assert_eq!(with_day(date, 31), NaiveDate::from_ymd_opt(2023, 3, 3));
/// ```
pub fn with_day(date: NaiveDate, day: u32) -> Option<NaiveDate> {
    compose_date(date.year(), date.month0() as i32, i32::try_from(day).ok()?)
}

/// Replace the month (1-based), keeping the day of the month even if it
/// rolls over.
///
/// ```
/// use calendar_math::with_month;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2023, 5, 31).unwrap();
/// assert_eq!(with_month(date, 7), NaiveDate::from_ymd_opt(2023, 7, 31));
/// assert_eq!(with_month(date, 6), NaiveDate::from_ymd_opt(2023, 7, 1));
/// ```
pub fn with_month(date: NaiveDate, month: u32) -> Option<NaiveDate> {
    let month0 = i32::try_from(month).ok()? - 1;
    compose_date(date.year(), month0, date.day() as i32)
}

/// Replace the year, keeping month and day even if it rolls over.
///
/// ```
/// use calendar_math::with_year;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// assert_eq!(with_year(date, 2028), NaiveDate::from_ymd_opt(2028, 2, 29));
/// assert_eq!(with_year(date, 2023), NaiveDate::from_ymd_opt(2023, 3, 1));
/// ```
pub fn with_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    compose_date(year, date.month0() as i32, date.day() as i32)
}

// --
// -- Month navigation
// --

/// Target of a month shift.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum MonthShift {
    /// One month later.
    Forward,
    /// One month earlier.
    Backward,
    /// An explicit month of the same year.
    To(Month),
}

impl From<bool> for MonthShift {
    fn from(forward: bool) -> Self {
        if forward {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

impl From<Month> for MonthShift {
    fn from(month: Month) -> Self {
        Self::To(month)
    }
}

/// Move a date to another month without clamping the day of the month.
///
/// When the day does not exist in the target month the date rolls over into
/// the following month, just like a generic "set month" primitive would.
///
/// ```
/// use calendar_math::{shift_month, MonthShift};
/// use chrono::{Month, NaiveDate};
///
/// let date = NaiveDate::from_ymd_opt(2023, 12, 15).unwrap();
/// assert_eq!(shift_month(date, MonthShift::Forward), NaiveDate::from_ymd_opt(2024, 1, 15));
/// assert_eq!(shift_month(date, MonthShift::To(Month::March)), NaiveDate::from_ymd_opt(2023, 3, 15));
///
/// let date = NaiveDate::from_ymd_opt(2023, 3, 31).unwrap();
/// assert_eq!(shift_month(date, MonthShift::Backward), NaiveDate::from_ymd_opt(2023, 3, 3));
/// ```
pub fn shift_month(date: NaiveDate, shift: MonthShift) -> Option<NaiveDate> {
    let month0 = date.month0() as i32;

    let target = match shift {
        MonthShift::Forward => month0 + 1,
        MonthShift::Backward => month0 - 1,
        MonthShift::To(month) => month.number_from_month() as i32 - 1,
    };

    compose_date(date.year(), target, date.day() as i32)
}

/// Get a month from its 0-based index.
///
/// ```
/// use calendar_math::month_from_index;
/// use chrono::Month;
///
/// assert_eq!(month_from_index(0), Some(Month::January));
/// assert_eq!(month_from_index(11), Some(Month::December));
/// assert_eq!(month_from_index(12), None);
/// ```
pub fn month_from_index(index: u32) -> Option<Month> {
    let number = u8::try_from(index.checked_add(1)?).ok()?;
    Month::try_from(number).ok()
}

#[cfg(test)]
mod test {
    use chrono::{Datelike, Month, NaiveDate, Weekday};

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("invalid test date")
    }

    #[test]
    fn leap_years_match_gregorian_rule() {
        for year in -1000..=3000 {
            let expected = NaiveDate::from_ymd_opt(year, 2, 29).is_some();
            assert_eq!(is_leap_year(year), expected, "year {year}");
            assert_eq!(days_in_month(year, 2) == 29, expected, "year {year}");
        }
    }

    #[test]
    fn month_lengths_match_chrono() {
        for year in [1900, 1999, 2000, 2023, 2024, 2100] {
            for month in 1..=12 {
                let first = date(year, month, 1);
                let next_first = shift_month(first, MonthShift::Forward).unwrap();
                let expected = (next_first - first).num_days() as u32;
                assert_eq!(days_in_month(year, month), expected, "{year}-{month}");
            }
        }
    }

    #[test]
    #[should_panic]
    fn month_zero_is_invalid() {
        days_in_month(2024, 0);
    }

    #[test]
    fn normalize_is_a_bijection() {
        for first in [FirstWeekDay::Sunday, FirstWeekDay::Monday] {
            let mut seen: Vec<_> = (0..7).map(|i| normalize_weekday(first, i)).collect();
            seen.sort_unstable();
            assert_eq!(seen, [0, 1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn monday_first_mapping() {
        let mapped: Vec<_> = (0..7)
            .map(|i| normalize_weekday(FirstWeekDay::Monday, i))
            .collect();

        assert_eq!(mapped, [6, 0, 1, 2, 3, 4, 5]);
        assert_eq!(FirstWeekDay::Monday.weekday_num(Weekday::Mon), 0);
        assert_eq!(FirstWeekDay::Sunday.weekday_num(Weekday::Sat), 6);
    }

    #[test]
    fn first_week_day_round_trip() {
        for first in [FirstWeekDay::Sunday, FirstWeekDay::Monday] {
            assert_eq!(first.to_string().parse(), Ok(first));
        }

        assert_eq!(FirstWeekDay::default(), FirstWeekDay::Sunday);
    }

    #[test]
    fn twelve_shifts_return_to_same_month() {
        let start = date(2023, 5, 14);
        let mut curr = start;

        for _ in 0..12 {
            curr = shift_month(curr, MonthShift::Forward).unwrap();
        }

        assert_eq!(curr, date(2024, 5, 14));

        let back = shift_month(shift_month(start, MonthShift::Forward).unwrap(), false.into());
        assert_eq!(back, Some(start));
    }

    #[test]
    fn shift_overflow_rolls_over() {
        // Feb 31st does not exist, the date lands in March and shifting back
        // only goes to February.
        let forward = shift_month(date(2023, 1, 31), MonthShift::Forward).unwrap();
        assert_eq!(forward, date(2023, 3, 3));

        let backward = shift_month(forward, MonthShift::Backward).unwrap();
        assert_eq!(backward, date(2023, 2, 3));

        assert_eq!(
            shift_month(date(2024, 3, 31), MonthShift::Backward),
            Some(date(2024, 3, 2)),
        );

        assert_eq!(
            shift_month(date(2023, 8, 31), MonthShift::To(Month::September)),
            Some(date(2023, 10, 1)),
        );
    }

    #[test]
    fn shift_across_years() {
        assert_eq!(
            shift_month(date(2024, 1, 10), MonthShift::Backward),
            Some(date(2023, 12, 10)),
        );

        assert_eq!(
            shift_month(date(2023, 12, 31), MonthShift::Forward),
            Some(date(2024, 1, 31)),
        );
    }

    #[test]
    fn compose_negative_days() {
        assert_eq!(compose_date(2024, 0, 0), Some(date(2023, 12, 31)));
        assert_eq!(compose_date(2024, 0, -30), Some(date(2023, 12, 1)));
        assert_eq!(compose_date(2024, 0, 400), Some(date(2025, 2, 3)));
    }

    #[test]
    fn compose_out_of_range() {
        assert_eq!(compose_date(i32::MAX, 0, 1), None);
        assert_eq!(compose_date(i32::MAX, 12, 1), None);
        assert_eq!(with_year(date(2024, 1, 1), i32::MIN), None);
    }

    #[test]
    fn component_edits_keep_other_components() {
        let base = date(2024, 6, 15);
        assert_eq!(with_day(base, 1).map(|d| (d.year(), d.month())), Some((2024, 6)));
        assert_eq!(with_month(base, 1).map(|d| (d.year(), d.day())), Some((2024, 15)));
        assert_eq!(with_year(base, 1999).map(|d| (d.month(), d.day())), Some((6, 15)));
    }
}
