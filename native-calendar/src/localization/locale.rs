use std::borrow::Cow;

use chrono::Weekday;

/// Short and long display names of a month or a weekday.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Names {
    pub short: Cow<'static, str>,
    pub large: Cow<'static, str>,
}

impl Names {
    /// Build names from static strings, usable in constant tables.
    pub const fn from_static(short: &'static str, large: &'static str) -> Self {
        Self { short: Cow::Borrowed(short), large: Cow::Borrowed(large) }
    }

    /// Build names from any kind of string.
    ///
    /// ```
    /// use native_calendar::localization::Names;
    ///
    /// let names = Names::new("Jan", String::from("January"));
    /// assert_eq!(names.large, "January");
    /// ```
    pub fn new(short: impl Into<Cow<'static, str>>, large: impl Into<Cow<'static, str>>) -> Self {
        Self { short: short.into(), large: large.into() }
    }
}

/// Display names used by the calendar, consumed as a pure lookup table.
///
/// Weekdays are indexed from Sunday, whatever the first day of the week of
/// the calendar is.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Locale {
    pub months: [Names; 12],
    pub days: [Names; 7],
}

impl Locale {
    /// Get the names of a month, `month` being 1-based.
    ///
    /// ```
    /// use native_calendar::Locale;
    ///
    /// assert_eq!(Locale::EN.month(2).large, "February");
    /// assert_eq!(Locale::ES.month(12).short, "Dic");
    /// ```
    pub fn month(&self, month: u32) -> &Names {
        assert!((1..=12).contains(&month));
        &self.months[(month - 1) as usize]
    }

    /// Get the names of a weekday.
    ///
    /// ```
    /// use chrono::Weekday;
    /// use native_calendar::Locale;
    ///
    /// assert_eq!(Locale::EN.weekday(Weekday::Sun).short, "Sun");
    /// assert_eq!(Locale::ES.weekday(Weekday::Mon).large, "Lunes");
    /// ```
    pub fn weekday(&self, weekday: Weekday) -> &Names {
        &self.days[weekday.num_days_from_sunday() as usize]
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::ES
    }
}
