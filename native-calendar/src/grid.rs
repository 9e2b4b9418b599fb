//! Cells of the day, month and year grids.
//!
//! These are plain data consumed by a view, every cell carries the key used
//! to identify it when it's clicked.

use calendar_math::FirstWeekDay;
use chrono::{Datelike, Days, NaiveDate};

use native_calendar_syntax::DateHash;

use crate::localization::{Locale, Names};
use crate::state::{clamp_year_window, CoreState, Selection, YEAR_WINDOW};

/// Month a day cell belongs to, relatively to the displayed month.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum CellKind {
    /// Borrowed from the previous month to fill the first week.
    Prev,
    Current,
    /// Borrowed from the next month to fill the last week.
    Next,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Canonical key of `date`.
    pub hash: String,
    pub kind: CellKind,
    pub today: bool,
    pub active: bool,
}

impl DayCell {
    fn new(date: NaiveDate, kind: CellKind, selected: &Selection, today: NaiveDate) -> Self {
        let hash = DateHash::from(date).to_string();
        let active = hash == selected.hash;
        Self { date, hash, kind, today: date == today, active }
    }
}

/// Build the cells of the day grid: full weeks covering the displayed month.
///
/// ```
/// use chrono::NaiveDate;
/// use native_calendar::grid::{day_grid, CellKind};
/// use native_calendar::{CoreState, FirstWeekDay, Selection};
///
/// let anchor = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
/// let core = CoreState::new(anchor, FirstWeekDay::Monday).unwrap();
/// let cells = day_grid(&core, &Selection::new(anchor), anchor);
///
/// assert_eq!(cells.len(), 35);
/// assert_eq!(cells[0].hash, "2024/1/29");
/// assert_eq!(cells[0].kind, CellKind::Prev);
/// assert!(cells[3].active);
/// ```
pub fn day_grid(core: &CoreState, selected: &Selection, today: NaiveDate) -> Vec<DayCell> {
    let current = &core.current;
    let first_day = current.first_day();
    let last_day = current.last_day();

    let leading = (1..=current.first_day_to_week_day_num)
        .rev()
        .filter_map(|offset| first_day.checked_sub_days(Days::new(offset.into())))
        .map(|date| DayCell::new(date, CellKind::Prev, selected, today));

    let days = (1..=current.days_count)
        .filter_map(|day| first_day.with_day(day))
        .map(|date| DayCell::new(date, CellKind::Current, selected, today));

    let trailing = (1..7 - current.last_day_to_week_day_num)
        .filter_map(|offset| last_day.checked_add_days(Days::new(offset.into())))
        .map(|date| DayCell::new(date, CellKind::Next, selected, today));

    leading.chain(days).chain(trailing).collect()
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct MonthCell<'a> {
    /// 0-based index of the month.
    pub index: u32,
    pub names: &'a Names,
    pub active: bool,
}

/// Build the 12 cells of the month grid.
pub fn month_grid<'a>(locale: &'a Locale, selected: &Selection) -> Vec<MonthCell<'a>> {
    (0..)
        .zip(&locale.months)
        .map(|(index, names)| MonthCell { index, names, active: index == selected.date.month0() })
        .collect()
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct YearCell {
    pub year: i32,
    pub active: bool,
}

/// Build the cells of the year grid starting at `window_start`, moved
/// back into the supported range if needed.
pub fn year_grid(window_start: i32, selected: &Selection) -> Vec<YearCell> {
    let window_start = clamp_year_window(window_start);

    (window_start..window_start + YEAR_WINDOW)
        .map(|year| YearCell { year, active: year == selected.date.year() })
        .collect()
}

/// Labels of the buttons moving the year grid to the previous and next
/// windows. Both windows stop at the bounds of the supported range.
///
/// ```
/// use native_calendar::grid::year_window_labels;
///
/// assert_eq!(
///     year_window_labels(2024),
///     ("2008 - 2023".to_string(), "2040 - 2055".to_string()),
/// );
///
/// assert_eq!(
///     year_window_labels(9980),
///     ("9964 - 9979".to_string(), "9984 - 9999".to_string()),
/// );
/// ```
pub fn year_window_labels(window_start: i32) -> (String, String) {
    let label = |start: i32| {
        let start = clamp_year_window(start);
        format!("{} - {}", start, start + YEAR_WINDOW - 1)
    };

    (
        label(window_start.saturating_sub(YEAR_WINDOW)),
        label(window_start.saturating_add(YEAR_WINDOW)),
    )
}

/// Weekday names in display order.
///
/// ```
/// use native_calendar::grid::weekday_headers;
/// use native_calendar::{FirstWeekDay, Locale};
///
/// let locale = Locale::EN;
/// let headers = weekday_headers(&locale, FirstWeekDay::Monday);
/// assert_eq!(headers[0].short, "Mon");
/// assert_eq!(headers[6].short, "Sun");
/// ```
pub fn weekday_headers(locale: &Locale, first_week_day: FirstWeekDay) -> Vec<&Names> {
    let mut weekday = first_week_day.weekday();

    (0..7)
        .map(|_| {
            let names = locale.weekday(weekday);
            weekday = weekday.succ();
            names
        })
        .collect()
}
