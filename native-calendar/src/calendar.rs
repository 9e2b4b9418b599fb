use calendar_math::{
    days_in_month, month_from_index, shift_month, with_day, with_month, with_year, FirstWeekDay,
    MonthShift,
};
use chrono::{Datelike, Days, Local, NaiveDate};

use crate::error::Error;
use crate::events::{Callback, EventKey, EventPayload, Listeners};
use crate::fields::{Edit, Field, FieldInput, FieldKey, FieldState};
use crate::localization::Locale;
use crate::options::{Options, PickerType};
use crate::state::{clamp_year_window, CoreState, Picker, Selection, ViewState, YEAR_WINDOW};
use crate::view::{Frame, NoView, View};

/// The lower bound of dates handled by the calendar
pub const DATE_START: NaiveDate = NaiveDate::from_ymd_opt(0, 1, 1).unwrap();

/// The upper bound of dates handled by the calendar, the year field can't
/// hold more than 4 digits
pub const DATE_END: NaiveDate = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();

// --
// -- Calendar
// --

/// A date picker: owns the anchor date which drives the displayed month,
/// the current selection and the text being typed in the fields.
///
/// All interactions are synchronous: the state is fully updated, then the
/// view is asked to render it and finally listeners are notified.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use chrono::NaiveDate;
/// use native_calendar::{Calendar, Callback, EventKey, MonthShift, Options};
///
/// let initial = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let mut calendar = Calendar::new(Options::default().with_initial_date(initial));
///
/// let changes = Rc::new(Cell::new(0));
/// let counter = changes.clone();
/// let callback: Callback = Rc::new(move |_| counter.set(counter.get() + 1));
/// calendar.add_listener(EventKey::OnChange, callback);
///
/// calendar.navigate(MonthShift::Forward);
/// assert_eq!(calendar.anchor(), NaiveDate::from_ymd_opt(2024, 4, 15).unwrap());
/// assert_eq!(changes.get(), 1);
/// ```
#[derive(Debug)]
pub struct Calendar<V: View = NoView> {
    first_week_day: FirstWeekDay,
    locale: Locale,
    picker_type: PickerType,
    /// Fixed date for today, the local date is used if not specified.
    today: Option<NaiveDate>,
    /// Derived from the anchor date, only updated through `set_anchor`.
    core: CoreState,
    state: ViewState,
    fields: FieldState,
    listeners: Listeners,
    view: V,
    mounted: bool,
}

impl Calendar<NoView> {
    /// Create a calendar which is not attached to any view.
    pub fn new(options: Options) -> Self {
        let mut calendar = Self::with_view(NoView, options, Listeners::new());
        calendar.mounted = true;
        calendar
    }
}

impl<V: View> Calendar<V> {
    /// Create a calendar displayed by `view`, which must be mounted before
    /// anything is rendered. Listeners passed here are notified of the
    /// creation.
    pub fn with_view(view: V, options: Options, listeners: Listeners) -> Self {
        let today = options.today;
        let first_week_day = options.first_week_day;

        let initial = options
            .initial_date
            .or(today)
            .unwrap_or_else(|| Local::now().date_naive())
            .clamp(DATE_START, DATE_END);

        let core = CoreState::new(initial, first_week_day)
            .expect("dates in supported range should have neighbours");

        let calendar = Self {
            first_week_day,
            locale: options.locale,
            picker_type: options.picker_type,
            today,
            core,
            state: ViewState::new(options.picker_type.initial_picker(), initial),
            fields: FieldState::new(),
            listeners,
            view,
            mounted: false,
        };

        #[cfg(feature = "log")]
        log::debug!("Created {} picker anchored at {initial}", calendar.picker_type);

        calendar.emit(EventKey::OnCreated, EventPayload::Lifecycle);
        calendar
    }

    /// Create a calendar and mount it into `host`.
    ///
    /// ```
    /// use native_calendar::{Calendar, NoView, Options};
    ///
    /// assert!(Calendar::create(NoView, "#calendar", Options::default()).is_ok());
    /// ```
    pub fn create(view: V, host: &str, options: Options) -> Result<Self, Error> {
        let mut calendar = Self::with_view(view, options, Listeners::new());
        calendar.mount(host)?;
        Ok(calendar)
    }

    /// Attach the view to the element designated by `host` and render.
    pub fn mount(&mut self, host: &str) -> Result<(), Error> {
        if !self.view.mount(host) {
            #[cfg(feature = "log")]
            log::error!("No host element matches {host}");

            return Err(Error::HostNotFound(host.to_string()));
        }

        self.mounted = true;
        self.refresh();
        self.emit(EventKey::OnMount, EventPayload::Lifecycle);
        Ok(())
    }

    /// Detach the view and drop all listeners.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }

        self.emit(EventKey::OnUnmount, EventPayload::Lifecycle);
        self.view.unmount();
        self.mounted = false;
        self.listeners.clear();
    }

    // --
    // -- Accessors
    // --

    /// Date driving the displayed month.
    pub fn anchor(&self) -> NaiveDate {
        self.core.anchor()
    }

    pub fn core_state(&self) -> &CoreState {
        &self.core
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn selection(&self) -> &Selection {
        &self.state.current_selected
    }

    pub fn picker(&self) -> Picker {
        self.state.current_picker
    }

    pub fn picker_type(&self) -> PickerType {
        self.picker_type
    }

    pub fn fields(&self) -> &FieldState {
        &self.fields
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn first_week_day(&self) -> FirstWeekDay {
        self.first_week_day
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Local date, or the date configured as today.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Current state of the calendar as it would be rendered.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            core: &self.core,
            state: &self.state,
            fields: &self.fields,
            locale: &self.locale,
            first_week_day: self.first_week_day,
            today: self.today(),
        }
    }

    // --
    // -- Listeners
    // --

    /// Register a callback for an event, return `false` if it was already
    /// registered.
    pub fn add_listener(&mut self, event: EventKey, callback: Callback) -> bool {
        self.listeners.add(event, callback)
    }

    /// Register several callbacks for an event, return the number of new
    /// registrations.
    pub fn add_listeners(
        &mut self,
        event: EventKey,
        callbacks: impl IntoIterator<Item = Callback>,
    ) -> usize {
        self.listeners.extend(event, callbacks)
    }

    pub fn remove_listener(&mut self, event: EventKey, callback: &Callback) -> bool {
        self.listeners.remove(event, callback)
    }

    // --
    // -- Internals
    // --

    fn emit(&self, event: EventKey, payload: EventPayload) {
        self.listeners.emit(event, &payload);
    }

    fn refresh(&mut self) {
        if !self.mounted {
            return;
        }

        let frame = Frame {
            core: &self.core,
            state: &self.state,
            fields: &self.fields,
            locale: &self.locale,
            first_week_day: self.first_week_day,
            today: self.today.unwrap_or_else(|| Local::now().date_naive()),
        };

        self.view.render(&frame);
    }

    /// Move the anchor date and derive the new core state, return `false`
    /// and leave the calendar untouched if the date is not supported.
    fn set_anchor(&mut self, date: Option<NaiveDate>) -> bool {
        let Some(date) = date.filter(|date| (DATE_START..=DATE_END).contains(date)) else {
            #[cfg(feature = "log")]
            log::debug!("Ignored anchor outside of supported range: {date:?}");

            return false;
        };

        if date == self.core.anchor() {
            return true;
        }

        let Some(core) = CoreState::new(date, self.first_week_day) else {
            return false;
        };

        self.core = core;
        true
    }

    fn select_anchor(&mut self) {
        self.state.current_selected = Selection::new(self.anchor());
    }

    // --
    // -- Navigation
    // --

    /// Switch the active grid. Return `false` if this kind of picker does
    /// not display this grid.
    pub fn change_picker(&mut self, picker: Picker) -> bool {
        if !self.picker_type.allows(picker) {
            #[cfg(feature = "log")]
            log::debug!("A {} picker can't display {picker:?}", self.picker_type);

            return false;
        }

        if picker == Picker::Years && self.state.current_picker != Picker::Years {
            self.state.year_window = clamp_year_window(self.core.current.year);
        }

        self.state.current_picker = picker;
        self.refresh();
        true
    }

    /// Shift the anchor date to another month.
    ///
    /// The day of the month is kept as is, which makes the anchor roll over
    /// into the following month when the target month is too short.
    pub fn navigate(&mut self, shift: MonthShift) -> bool {
        if !self.set_anchor(shift_month(self.anchor(), shift)) {
            return false;
        }

        self.refresh();
        self.emit(EventKey::OnChange, EventPayload::Change(self.core.current));
        true
    }

    /// Open or close the popover, return the new state.
    pub fn toggle_dropdown(&mut self) -> bool {
        self.state.dropdown_open = !self.state.dropdown_open;
        self.refresh();
        self.state.dropdown_open
    }

    /// Move the year grid to the previous or next window of years. Neither
    /// the anchor nor the selection change.
    ///
    /// The window stops at the bounds of the supported range.
    pub fn shift_year_window(&mut self, forward: bool) {
        let delta = if forward { YEAR_WINDOW } else { -YEAR_WINDOW };
        self.state.year_window = clamp_year_window(self.state.year_window.saturating_add(delta));

        if self.state.current_picker == Picker::Years {
            self.refresh();
        }
    }

    // --
    // -- Selection
    // --

    /// Select the date of a day cell from its key.
    ///
    /// Malformed keys and keys that don't match any date are ignored. When
    /// the cell is borrowed from a neighbour month, the anchor moves into
    /// that month and keeps its day of the month, clamped to the length of
    /// that month. Other dates are selected without moving the anchor.
    pub fn select_date(&mut self, hash: &str) -> bool {
        if self.state.current_picker != Picker::Days {
            return false;
        }

        let date = match native_calendar_syntax::parse(hash) {
            Ok(date_hash) => date_hash.to_date(),
            Err(_err) => {
                #[cfg(feature = "log")]
                log::debug!("Ignored selection of malformed key {hash:?}: {_err}");

                None
            }
        };

        let Some(date) = date.filter(|date| (DATE_START..=DATE_END).contains(date)) else {
            return false;
        };

        let target = self.borrowed_cell_anchor(date);
        self.state.current_selected = Selection::new(date);
        self.state.dropdown_open = false;
        self.fields.fill(date);

        let moved = target.is_some_and(|target| self.set_anchor(Some(target)));
        self.refresh();

        if moved {
            self.emit(EventKey::OnChange, EventPayload::Change(self.core.current));
        }

        self.emit(EventKey::OnSelect, EventPayload::Select(self.selection().clone()));
        true
    }

    /// Anchor to move to when `date` is a cell of the day grid borrowed from
    /// the previous or next month.
    fn borrowed_cell_anchor(&self, date: NaiveDate) -> Option<NaiveDate> {
        let current = &self.core.current;
        let first_day = current.first_day();
        let last_day = current.last_day();

        let grid_start =
            first_day.checked_sub_days(Days::new(current.first_day_to_week_day_num.into()));

        let grid_end =
            last_day.checked_add_days(Days::new((6 - current.last_day_to_week_day_num).into()));

        let borrowed = (date < first_day && grid_start.is_some_and(|start| date >= start))
            || (date > last_day && grid_end.is_some_and(|end| date <= end));

        if !borrowed {
            return None;
        }

        let day = self.anchor().day().min(days_in_month(date.year(), date.month()));
        date.with_day(day)
    }

    /// Select a cell of the month grid from its 0-based index.
    pub fn select_month(&mut self, index: u32) -> bool {
        if self.state.current_picker != Picker::Months {
            return false;
        }

        let Some(month) = month_from_index(index) else {
            return false;
        };

        if !self.set_anchor(shift_month(self.anchor(), MonthShift::To(month))) {
            return false;
        }

        self.fields.set(Field::Month, index + 1);
        self.commit_grid_selection()
    }

    /// Select a cell of the year grid.
    pub fn select_year(&mut self, year: i32) -> bool {
        if self.state.current_picker != Picker::Years {
            return false;
        }

        if !self.set_anchor(with_year(self.anchor(), year)) {
            return false;
        }

        self.fields.fill_year(year);
        self.commit_grid_selection()
    }

    /// Finish a selection in the month or year grid: stand-alone pickers
    /// select the new anchor, date pickers go back to the day grid.
    fn commit_grid_selection(&mut self) -> bool {
        let standalone = self.picker_type.is_standalone();

        if standalone {
            self.select_anchor();
        } else {
            self.state.current_picker = Picker::Days;
        }

        self.refresh();
        self.emit(EventKey::OnChange, EventPayload::Change(self.core.current));

        if standalone {
            self.emit(EventKey::OnSelect, EventPayload::Select(self.selection().clone()));
        }

        true
    }

    // --
    // -- Text fields
    // --

    /// Handle an edit event on a text field.
    pub fn input(&mut self, field: Field, input: FieldInput<'_>) -> Edit {
        let edit = self.fields.input(field, input);
        self.apply_edit(field, edit);
        edit
    }

    /// Handle an arrow key pressed on a text field.
    pub fn key(&mut self, field: Field, key: FieldKey) -> Edit {
        let edit = self.fields.key(field, key);
        self.apply_edit(field, edit);
        edit
    }

    fn apply_edit(&mut self, field: Field, edit: Edit) {
        match edit {
            Edit::Commit { value, advance } => {
                let anchor = self.anchor();

                let date = match field {
                    Field::Day => with_day(anchor, value),
                    Field::Month => with_month(anchor, value),
                    Field::Year => i32::try_from(value)
                        .ok()
                        .and_then(|year| with_year(anchor, year)),
                };

                let committed = self.set_anchor(date);

                if committed {
                    self.select_anchor();
                }

                if let Some(next) = advance.filter(|_| self.mounted) {
                    self.view.focus(next);
                }

                self.refresh();

                if committed {
                    self.emit(EventKey::OnEdit, EventPayload::Edit(self.selection().clone()));
                }
            }
            Edit::Partial | Edit::Cleared => self.refresh(),
            Edit::Ignored => {}
        }
    }

    // --
    // -- Context
    // --

    /// Change the first day of the week, which shifts all weekday columns.
    pub fn set_first_week_day(&mut self, first_week_day: FirstWeekDay) {
        self.first_week_day = first_week_day;

        self.core = CoreState::new(self.anchor(), first_week_day)
            .expect("anchor in supported range should have neighbours");

        self.context_changed();
    }

    /// Change the names displayed for months and weekdays.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        self.context_changed();
    }

    fn context_changed(&mut self) {
        self.refresh();
        self.emit(EventKey::OnContextChange, EventPayload::Change(self.core.current));
    }
}

impl<V: View> Drop for Calendar<V> {
    fn drop(&mut self) {
        self.unmount()
    }
}
