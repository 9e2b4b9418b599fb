mod navigation;
mod pickers;

use std::cell::RefCell;
use std::rc::Rc;

use crate::events::EventPayload;
use crate::fields::Field;
use crate::view::{Frame, View};
use crate::{Callback, EventKey};

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

/// Build a headless calendar with fixed dates.
#[macro_export]
macro_rules! calendar_at {
    (
        $date: expr
        $( , first = $first: expr )?
        $( , kind = $kind: expr )?
        $( , )?
    ) => {{
        use $crate::{date, Calendar, Options};

        let options = Options::default()
            .with_initial_date(date!($date))
            .with_today(date!($date))
            $( .with_first_week_day($first) )?
            $( .with_type($kind) )?;

        Calendar::new(options)
    }};
}

/// Keep track of everything a calendar asked to its view.
#[derive(Debug, Default)]
pub(crate) struct RecordingView {
    pub hosts: Vec<&'static str>,
    pub mounted_at: Option<String>,
    pub renders: usize,
    pub last_month_label: Option<String>,
    pub focused: Vec<Field>,
    pub unmounted: bool,
}

impl RecordingView {
    pub fn with_host(host: &'static str) -> Self {
        Self { hosts: vec![host], ..Self::default() }
    }
}

impl View for RecordingView {
    fn mount(&mut self, host: &str) -> bool {
        if !self.hosts.iter().any(|known| *known == host) {
            return false;
        }

        self.mounted_at = Some(host.to_string());
        true
    }

    fn render(&mut self, frame: &Frame<'_>) {
        self.renders += 1;
        self.last_month_label = Some(frame.month_label().to_string());
    }

    fn focus(&mut self, field: Field) {
        self.focused.push(field);
    }

    fn unmount(&mut self) {
        self.unmounted = true;
    }
}

/// A callback that stores all payloads it receives.
pub(crate) fn recorder() -> (Callback, Rc<RefCell<Vec<EventPayload>>>) {
    let received = Rc::new(RefCell::new(Vec::new()));
    let sink = received.clone();
    let callback: Callback = Rc::new(move |payload| sink.borrow_mut().push(payload.clone()));
    (callback, received)
}

/// A callback that logs its name and the event it was registered for.
pub(crate) fn tracer(
    name: &'static str,
    event: EventKey,
    log: &Rc<RefCell<Vec<String>>>,
) -> Callback {
    let log = log.clone();
    Rc::new(move |_| log.borrow_mut().push(format!("{name}:{event}")))
}
