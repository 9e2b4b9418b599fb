//! Keystroke-level interpretation of the day / month / year text fields.

use chrono::{Datelike, NaiveDate};

/// One of the text fields.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Day,
    Month,
    Year,
}

impl Field {
    /// Largest value accepted by the field.
    pub const fn max(self) -> u32 {
        match self {
            Self::Day => 31,
            Self::Month => 12,
            Self::Year => 9999,
        }
    }

    /// Number of digits the field can hold.
    pub const fn width(self) -> usize {
        match self {
            Self::Day | Self::Month => 2,
            Self::Year => 4,
        }
    }

    /// Field focused once this one is complete.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Day => Some(Self::Month),
            Self::Month => Some(Self::Year),
            Self::Year => None,
        }
    }

    /// Text displayed while the field is empty.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Day => "dd",
            Self::Month => "mm",
            Self::Year => "aaaa",
        }
    }
}

/// An edit event on a text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldInput<'a> {
    /// Text typed by the user (`insertText` or `insertCompositionText`).
    Insert(&'a str),
    /// Any other kind of edit: paste, deletion, replacement, ...
    Other,
}

/// Arrow keys pressed on a text field.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum FieldKey {
    Up,
    Down,
}

/// Outcome of an edit on a field buffer.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Edit {
    /// The buffer holds a new value that must be applied to the date.
    Commit {
        value: u32,
        /// Field that should receive the focus next.
        advance: Option<Field>,
    },
    /// The buffer holds the beginning of a value (a single `0`).
    Partial,
    /// The buffer was reset to its placeholder.
    Cleared,
    /// The event was ignored, the buffer did not change.
    Ignored,
}

/// Text being typed in each field, `None` when the placeholder is displayed.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct FieldState {
    pub day: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Day => self.day.as_deref(),
            Field::Month => self.month.as_deref(),
            Field::Year => self.year.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Day => &mut self.day,
            Field::Month => &mut self.month,
            Field::Year => &mut self.year,
        }
    }

    /// Numeric value of the buffer.
    pub fn value(&self, field: Field) -> Option<u32> {
        self.get(field)?.parse().ok()
    }

    /// Text displayed by a field.
    ///
    /// ```
    /// use native_calendar::fields::{Field, FieldState};
    ///
    /// let mut fields = FieldState::new();
    /// assert_eq!(fields.display(Field::Year), "aaaa");
    ///
    /// fields.set(Field::Year, 2024);
    /// assert_eq!(fields.display(Field::Year), "2024");
    /// ```
    pub fn display(&self, field: Field) -> &str {
        self.get(field).unwrap_or(field.placeholder())
    }

    pub fn set(&mut self, field: Field, value: u32) {
        *self.slot_mut(field) = Some(value.to_string());
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    /// Display all components of a date.
    pub fn fill(&mut self, date: NaiveDate) {
        self.set(Field::Day, date.day());
        self.set(Field::Month, date.month());
        self.fill_year(date.year());
    }

    /// Display a year, the field is cleared if it can't hold it.
    pub fn fill_year(&mut self, year: i32) {
        match u32::try_from(year) {
            Ok(year) if year <= Field::Year.max() => self.set(Field::Year, year),
            _ => self.clear(Field::Year),
        }
    }

    /// Apply a text edit to a field.
    ///
    /// Only single digits are accepted, any other edit resets the field. Day
    /// and month values that would exceed their maximum are either clamped
    /// or restarted from the typed digit.
    ///
    /// ```
    /// use native_calendar::fields::{Edit, Field, FieldInput, FieldState};
    ///
    /// let mut fields = FieldState::new();
    /// fields.input(Field::Day, FieldInput::Insert("4"));
    ///
    /// assert_eq!(
    ///     fields.input(Field::Day, FieldInput::Insert("0")),
    ///     Edit::Commit { value: 31, advance: Some(Field::Month) },
    /// );
    /// ```
    pub fn input(&mut self, field: Field, input: FieldInput<'_>) -> Edit {
        let digit = match input {
            FieldInput::Insert(data) => single_digit(data),
            FieldInput::Other => None,
        };

        let Some(digit) = digit else {
            #[cfg(feature = "log")]
            log::debug!("Rejected edit {input:?} on {field:?} field");

            self.clear(field);
            return Edit::Cleared;
        };

        let buffer = self.get(field).unwrap_or_default();

        if field == Field::Year {
            if buffer.len() >= field.width() {
                return Edit::Ignored;
            }

            let text = format!("{buffer}{digit}");
            let value = text.parse().expect("year buffer should only hold digits");
            *self.slot_mut(field) = Some(text);
            return Edit::Commit { value, advance: None };
        }

        let max = field.max();
        let buffer_value: u32 = buffer.parse().unwrap_or(0);
        let candidate = format!("{buffer}{digit}");

        let text = match candidate.parse::<u32>() {
            Ok(value) if value <= max => candidate,
            _ if buffer_value * 10 < max => max.to_string(),
            _ if digit != 0 => digit.to_string(),
            _ => max.to_string(),
        };

        let value: u32 = text.parse().expect("field buffer should only hold digits");

        if value == 0 {
            if text.len() >= field.width() {
                self.clear(field);
                return Edit::Cleared;
            }

            *self.slot_mut(field) = Some(text);
            return Edit::Partial;
        }

        let complete = text.len() >= field.width() || value * 10 > max;
        *self.slot_mut(field) = Some(text);
        Edit::Commit { value, advance: complete.then(|| field.next()).flatten() }
    }

    /// Apply an arrow key to a field: `Up` increments the value and `Down`
    /// decrements it, clearing the field below 1.
    ///
    /// ```
    /// use native_calendar::fields::{Edit, Field, FieldKey, FieldState};
    ///
    /// let mut fields = FieldState::new();
    /// assert_eq!(fields.key(Field::Month, FieldKey::Up), Edit::Commit { value: 1, advance: None });
    /// assert_eq!(fields.key(Field::Month, FieldKey::Down), Edit::Cleared);
    /// ```
    pub fn key(&mut self, field: Field, key: FieldKey) -> Edit {
        let current = self.value(field);

        match key {
            FieldKey::Up => {
                let value = current.map_or(1, |value| value + 1);

                if value > field.max() {
                    return Edit::Ignored;
                }

                self.set(field, value);
                Edit::Commit { value, advance: None }
            }
            FieldKey::Down => match current {
                Some(value) if value > 1 => {
                    self.set(field, value - 1);
                    Edit::Commit { value: value - 1, advance: None }
                }
                _ => {
                    self.clear(field);
                    Edit::Cleared
                }
            },
        }
    }
}

fn single_digit(data: &str) -> Option<u32> {
    let mut chars = data.chars();
    let digit = chars.next()?.to_digit(10)?;
    chars.next().is_none().then_some(digit)
}
