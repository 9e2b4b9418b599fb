//! Seam between the calendar state and whatever draws it.

use calendar_math::FirstWeekDay;
use chrono::NaiveDate;

use crate::fields::{Field, FieldState};
use crate::grid::{self, DayCell, MonthCell, YearCell};
use crate::localization::{Locale, Names};
use crate::state::{CoreState, ViewState};

/// Something able to display a calendar: a DOM builder, a terminal, a test
/// recorder, ...
///
/// The view never mutates the calendar, it receives a [`Frame`] each time
/// the displayed state changes.
pub trait View {
    /// Attach to the element designated by `host`, return `false` if no such
    /// element exists.
    fn mount(&mut self, host: &str) -> bool;

    /// Display a new state of the calendar.
    fn render(&mut self, frame: &Frame<'_>);

    /// Move keyboard focus to a text field.
    fn focus(&mut self, _field: Field) {}

    /// Detach from the host element.
    fn unmount(&mut self) {}
}

/// A view that displays nothing, used for headless calendars.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct NoView;

impl View for NoView {
    fn mount(&mut self, _host: &str) -> bool {
        true
    }

    fn render(&mut self, _frame: &Frame<'_>) {}
}

/// Read-only bundle of everything needed to draw the calendar.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub core: &'a CoreState,
    pub state: &'a ViewState,
    pub fields: &'a FieldState,
    pub locale: &'a Locale,
    pub first_week_day: FirstWeekDay,
    pub today: NaiveDate,
}

impl<'a> Frame<'a> {
    /// Cells of the day grid.
    pub fn days(&self) -> Vec<DayCell> {
        grid::day_grid(self.core, &self.state.current_selected, self.today)
    }

    /// Cells of the month grid.
    pub fn months(&self) -> Vec<MonthCell<'a>> {
        grid::month_grid(self.locale, &self.state.current_selected)
    }

    /// Cells of the year grid.
    pub fn years(&self) -> Vec<YearCell> {
        grid::year_grid(self.state.year_window, &self.state.current_selected)
    }

    /// Column headers of the day grid.
    pub fn weekdays(&self) -> Vec<&'a Names> {
        grid::weekday_headers(self.locale, self.first_week_day)
    }

    /// Label of the month button.
    pub fn month_label(&self) -> &'a str {
        &self.locale.month(self.core.current.month).large
    }

    /// Label of the year button.
    pub fn year_label(&self) -> String {
        self.core.current.year.to_string()
    }

    /// Labels of the previous and next year window buttons.
    pub fn year_window_labels(&self) -> (String, String) {
        grid::year_window_labels(self.state.year_window)
    }

    /// Text displayed by a field.
    pub fn field(&self, field: Field) -> &'a str {
        self.fields.display(field)
    }
}
