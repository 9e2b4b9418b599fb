//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.

use arbitrary::Arbitrary;
use chrono::{Datelike, Days, NaiveDate};

use native_calendar::grid::CellKind;
use native_calendar::{
    Calendar, CoreState, Field, FieldInput, FieldKey, FirstWeekDay, MonthShift, Options, Picker,
    PickerType, DATE_END, DATE_START,
};

/// A fuzzing example
#[derive(Arbitrary, Clone, Debug)]
pub struct Data {
    /// Days since 0000-01-01
    pub initial_days: u32,
    pub monday_first: bool,
    pub picker_type: FuzzPickerType,
    pub actions: Vec<Action>,
}

#[derive(Arbitrary, Clone, Copy, Debug)]
pub enum FuzzPickerType {
    Date,
    Month,
    Year,
}

impl From<FuzzPickerType> for PickerType {
    fn from(val: FuzzPickerType) -> Self {
        match val {
            FuzzPickerType::Date => Self::Date,
            FuzzPickerType::Month => Self::Month,
            FuzzPickerType::Year => Self::Year,
        }
    }
}

#[derive(Arbitrary, Clone, Copy, Debug)]
pub enum FuzzField {
    Day,
    Month,
    Year,
}

impl From<FuzzField> for Field {
    fn from(val: FuzzField) -> Self {
        match val {
            FuzzField::Day => Self::Day,
            FuzzField::Month => Self::Month,
            FuzzField::Year => Self::Year,
        }
    }
}

/// An interaction with the calendar
#[derive(Arbitrary, Clone, Debug)]
pub enum Action {
    Navigate { forward: bool },
    ChangePicker(u8),
    /// Click a cell of the displayed day grid
    ClickDay(u8),
    /// Select a day from an arbitrary key
    SelectDate(String),
    SelectMonth(u32),
    SelectYear { offset: i16 },
    ShiftYearWindow { forward: bool },
    ToggleDropdown,
    Input { field: FuzzField, text: Option<String> },
    Key { field: FuzzField, up: bool },
    SetMondayFirst(bool),
}

fn check_invariants(calendar: &Calendar) {
    let anchor = calendar.anchor();
    assert!((DATE_START..=DATE_END).contains(&anchor));

    // The derived state never goes stale.
    let expected = CoreState::new(anchor, calendar.first_week_day()).unwrap();
    assert_eq!(calendar.core_state(), &expected);

    assert!(calendar.picker_type().allows(calendar.picker()));

    let days = calendar.frame().days();
    assert_eq!(days.len() % 7, 0);
    assert_eq!(calendar.first_week_day().weekday_num(days[0].date.weekday()), 0);
    assert!(days.iter().filter(|cell| cell.active).count() <= 1);

    for pair in days.windows(2) {
        assert_eq!(pair[0].date.checked_add_days(Days::new(1)), Some(pair[1].date));
    }

    let current = days
        .iter()
        .filter(|cell| cell.kind == CellKind::Current)
        .count();

    assert_eq!(current as u32, expected.current.days_count);

    for field in [Field::Day, Field::Month, Field::Year] {
        if let Some(text) = calendar.fields().get(field) {
            assert!(text.len() <= field.width(), "{field:?}: {text:?}");
            assert!(text.parse::<u32>().is_ok_and(|value| value <= field.max()));
        }
    }
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_calendar(data: Data) -> bool {
    let Some(initial) = DATE_START.checked_add_days(Days::new(data.initial_days.into())) else {
        return false;
    };

    if initial > DATE_END || data.actions.len() > 256 {
        return false;
    }

    let first_week_day = if data.monday_first {
        FirstWeekDay::Monday
    } else {
        FirstWeekDay::Sunday
    };

    let options = Options::default()
        .with_first_week_day(first_week_day)
        .with_type(data.picker_type.into())
        .with_initial_date(initial)
        .with_today(initial);

    let mut calendar = Calendar::new(options);
    check_invariants(&calendar);

    for action in data.actions {
        match action {
            Action::Navigate { forward } => {
                calendar.navigate(MonthShift::from(forward));
            }
            Action::ChangePicker(picker) => {
                let picker = match picker % 3 {
                    0 => Picker::Days,
                    1 => Picker::Months,
                    _ => Picker::Years,
                };

                calendar.change_picker(picker);
            }
            Action::ClickDay(index) => {
                let days = calendar.frame().days();
                let cell = &days[usize::from(index) % days.len()];
                let hash = cell.hash.clone();
                let date = cell.date;

                if calendar.select_date(&hash) {
                    assert_eq!(calendar.selection().date, date);
                }
            }
            Action::SelectDate(hash) => {
                let before = calendar.selection().clone();

                if !calendar.select_date(&hash) {
                    assert_eq!(calendar.selection(), &before);
                }
            }
            Action::SelectMonth(index) => {
                calendar.select_month(index);
            }
            Action::SelectYear { offset } => {
                let year = calendar.view_state().year_window + i32::from(offset);
                calendar.select_year(year);
            }
            Action::ShiftYearWindow { forward } => calendar.shift_year_window(forward),
            Action::ToggleDropdown => {
                calendar.toggle_dropdown();
            }
            Action::Input { field, text } => {
                let input = match &text {
                    Some(text) => FieldInput::Insert(text),
                    None => FieldInput::Other,
                };

                calendar.input(field.into(), input);
            }
            Action::Key { field, up } => {
                let key = if up { FieldKey::Up } else { FieldKey::Down };
                calendar.key(field.into(), key);
            }
            Action::SetMondayFirst(monday_first) => {
                calendar.set_first_week_day(if monday_first {
                    FirstWeekDay::Monday
                } else {
                    FirstWeekDay::Sunday
                });
            }
        }

        check_invariants(&calendar);
    }

    true
}

/// Date of a day since the start of the supported range, used to write
/// readable regression cases.
pub fn days_since_start(date: NaiveDate) -> u32 {
    (date - DATE_START).num_days().try_into().unwrap_or(0)
}
