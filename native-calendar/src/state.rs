//! Snapshots describing what the calendar displays.

use calendar_math::{days_in_month, shift_month, FirstWeekDay, MonthShift};
use chrono::{Datelike, Local, NaiveDate};

use native_calendar_syntax::DateHash;

use crate::calendar::{DATE_END, DATE_START};

// --
// -- DateState
// --

/// Describe the month containing a date, with weekdays normalized to a
/// first day of week.
///
/// ```
/// use chrono::NaiveDate;
/// use native_calendar::{DateState, FirstWeekDay};
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
/// let state = DateState::new(date, FirstWeekDay::Monday);
///
/// assert_eq!(state.days_count, 29);
/// assert_eq!(state.first_day_to_week_day_num, 3);
/// assert_eq!(state.last_day_to_week_day_num, 3);
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct DateState {
    /// The date described by this state.
    pub initial_date: NaiveDate,
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    pub month_day: u32,
    /// Column of `initial_date` in a week.
    pub week_day: u32,
    /// Number of days in the month.
    pub days_count: u32,
    /// Column of the first day of the month in a week.
    pub first_day_to_week_day_num: u32,
    /// Column of the last day of the month in a week.
    pub last_day_to_week_day_num: u32,
}

impl DateState {
    pub fn new(date: NaiveDate, first_week_day: FirstWeekDay) -> Self {
        let days_count = days_in_month(date.year(), date.month());

        let first_day = date
            .with_day(1)
            .expect("first of the month should always exist");

        let last_day = date
            .with_day(days_count)
            .expect("last day of the month should always exist");

        Self {
            initial_date: date,
            year: date.year(),
            month: date.month(),
            month_day: date.day(),
            week_day: first_week_day.weekday_num(date.weekday()),
            days_count,
            first_day_to_week_day_num: first_week_day.weekday_num(first_day.weekday()),
            last_day_to_week_day_num: first_week_day.weekday_num(last_day.weekday()),
        }
    }

    /// State describing the current local date.
    pub fn now(first_week_day: FirstWeekDay) -> Self {
        Self::new(Local::now().date_naive(), first_week_day)
    }

    /// First day of the described month.
    pub fn first_day(&self) -> NaiveDate {
        self.initial_date
            .with_day(1)
            .expect("first of the month should always exist")
    }

    /// Last day of the described month.
    pub fn last_day(&self) -> NaiveDate {
        self.initial_date
            .with_day(self.days_count)
            .expect("last day of the month should always exist")
    }

    /// Check if a date belongs to the described month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

// --
// -- CoreState
// --

/// States for the anchor month and both of its neighbours.
///
/// Neighbours are obtained by shifting the anchor date by one month without
/// clamping the day of the month, hence `next` and `prev` may not describe
/// the months right after and before `current` when the anchor is close to
/// the end of a month.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct CoreState {
    pub current: DateState,
    pub next: DateState,
    pub prev: DateState,
}

impl CoreState {
    /// Derive all states from an anchor date. Return `None` if a neighbour
    /// can't be represented.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use native_calendar::{CoreState, FirstWeekDay};
    ///
    /// let anchor = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    /// let core = CoreState::new(anchor, FirstWeekDay::Sunday).unwrap();
    ///
    /// assert_eq!(core.prev.initial_date, NaiveDate::from_ymd_opt(2023, 12, 15).unwrap());
    /// assert_eq!(core.next.initial_date, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
    /// ```
    pub fn new(anchor: NaiveDate, first_week_day: FirstWeekDay) -> Option<Self> {
        let next = shift_month(anchor, MonthShift::Forward)?;
        let prev = shift_month(anchor, MonthShift::Backward)?;

        Some(Self {
            current: DateState::new(anchor, first_week_day),
            next: DateState::new(next, first_week_day),
            prev: DateState::new(prev, first_week_day),
        })
    }

    /// The anchor date.
    pub fn anchor(&self) -> NaiveDate {
        self.current.initial_date
    }
}

// --
// -- ViewState
// --

/// Active grid of the popover.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Picker {
    #[default]
    Days,
    Months,
    Years,
}

/// A selected date and its canonical key.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Selection {
    pub date: NaiveDate,
    /// Canonical `year/month/day` key of `date`, used to compare cells.
    pub hash: String,
}

impl Selection {
    /// ```
    /// use chrono::NaiveDate;
    /// use native_calendar::Selection;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    /// assert_eq!(Selection::new(date).hash, "2024/3/5");
    /// ```
    pub fn new(date: NaiveDate) -> Self {
        Self { date, hash: DateHash::from(date).to_string() }
    }
}

/// Number of years displayed by the year grid.
pub const YEAR_WINDOW: i32 = 16;

/// Move the first year of the year grid so that the whole window stays
/// within the supported range.
///
/// ```
/// use native_calendar::state::clamp_year_window;
///
/// assert_eq!(clamp_year_window(2024), 2024);
/// assert_eq!(clamp_year_window(9999), 9984);
/// assert_eq!(clamp_year_window(i32::MIN), 0);
/// ```
pub fn clamp_year_window(start: i32) -> i32 {
    start.clamp(DATE_START.year(), DATE_END.year() - YEAR_WINDOW + 1)
}

/// Everything the calendar displays that is not derived from the anchor.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ViewState {
    pub current_picker: Picker,
    pub current_selected: Selection,
    /// First year of the year grid.
    pub year_window: i32,
    /// Whether the popover is displayed.
    pub dropdown_open: bool,
}

impl ViewState {
    pub fn new(picker: Picker, selected: NaiveDate) -> Self {
        Self {
            current_picker: picker,
            current_selected: Selection::new(selected),
            year_window: clamp_year_window(selected.year()),
            dropdown_open: false,
        }
    }
}
