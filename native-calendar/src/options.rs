use std::fmt::Display;
use std::str::FromStr;

use calendar_math::FirstWeekDay;
use chrono::NaiveDate;

use crate::error::UnknownPickerType;
use crate::localization::Locale;
use crate::state::Picker;

// --
// -- PickerType
// --

/// Kind of widget: a full date picker, or a stand-alone month or year
/// picker restricted to a single grid.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum PickerType {
    #[default]
    Date,
    Month,
    Year,
}

impl PickerType {
    /// Grid displayed when the calendar is created.
    pub const fn initial_picker(self) -> Picker {
        match self {
            Self::Date => Picker::Days,
            Self::Month => Picker::Months,
            Self::Year => Picker::Years,
        }
    }

    /// Check if this kind of widget can display a grid.
    ///
    /// ```
    /// use native_calendar::{Picker, PickerType};
    ///
    /// assert!(PickerType::Date.allows(Picker::Years));
    /// assert!(PickerType::Month.allows(Picker::Months));
    /// assert!(!PickerType::Month.allows(Picker::Days));
    /// ```
    pub fn allows(self, picker: Picker) -> bool {
        self == Self::Date || picker == self.initial_picker()
    }

    /// Stand-alone pickers commit a selection when a cell is clicked.
    pub fn is_standalone(self) -> bool {
        self != Self::Date
    }
}

impl Display for PickerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
        }
    }
}

impl FromStr for PickerType {
    type Err = UnknownPickerType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(UnknownPickerType(s.to_string())),
        }
    }
}

// --
// -- Options
// --

/// Configuration of a calendar instance.
///
/// ```
/// use chrono::NaiveDate;
/// use native_calendar::{FirstWeekDay, Locale, Options};
///
/// let options = Options::default()
///     .with_first_week_day(FirstWeekDay::Monday)
///     .with_locale(Locale::EN)
///     .with_initial_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
///
/// assert_eq!(options.first_week_day, FirstWeekDay::Monday);
/// ```
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Options {
    /// Day displayed in the first column, Sunday by default.
    pub first_week_day: FirstWeekDay,
    /// Month and weekday names, Spanish by default.
    pub locale: Locale,
    /// Kind of widget.
    pub picker_type: PickerType,
    /// Date displayed and selected on creation, today by default.
    pub initial_date: Option<NaiveDate>,
    /// Override the local date used to highlight today.
    pub today: Option<NaiveDate>,
}

impl Options {
    pub fn with_first_week_day(self, first_week_day: FirstWeekDay) -> Self {
        Self { first_week_day, ..self }
    }

    pub fn with_locale(self, locale: Locale) -> Self {
        Self { locale, ..self }
    }

    pub fn with_type(self, picker_type: PickerType) -> Self {
        Self { picker_type, ..self }
    }

    pub fn with_initial_date(self, date: NaiveDate) -> Self {
        Self { initial_date: Some(date), ..self }
    }

    pub fn with_today(self, today: NaiveDate) -> Self {
        Self { today: Some(today), ..self }
    }
}
