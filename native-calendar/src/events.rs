//! Registry of callbacks notified when the calendar changes.

use std::collections::HashMap;
use std::fmt::Display;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;
use std::str::FromStr;

use crate::error::UnknownEventKey;
use crate::state::{DateState, Selection};

/// Events a listener can subscribe to.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventKey {
    /// The displayed month changed.
    OnChange,
    /// A date was picked from a grid.
    OnSelect,
    /// A date was typed in the text fields.
    OnEdit,
    OnCreated,
    OnMount,
    OnUnmount,
    /// Display settings (locale, first day of week) changed.
    OnContextChange,
}

impl EventKey {
    pub const ALL: [Self; 7] = [
        Self::OnChange,
        Self::OnSelect,
        Self::OnEdit,
        Self::OnCreated,
        Self::OnMount,
        Self::OnUnmount,
        Self::OnContextChange,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnChange => "onChange",
            Self::OnSelect => "onSelect",
            Self::OnEdit => "onEdit",
            Self::OnCreated => "onCreated",
            Self::OnMount => "onMount",
            Self::OnUnmount => "onUnmount",
            Self::OnContextChange => "onContextChange",
        }
    }
}

impl Display for EventKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventKey {
    type Err = UnknownEventKey;

    /// ```
    /// use native_calendar::EventKey;
    ///
    /// assert_eq!("onSelect".parse(), Ok(EventKey::OnSelect));
    /// assert!("onClick".parse::<EventKey>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownEventKey(s.to_string()))
    }
}

/// Data passed to listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventPayload {
    /// New state of the displayed month.
    Change(DateState),
    /// New selection after a click.
    Select(Selection),
    /// New selection after a keyboard edit.
    Edit(Selection),
    /// Creation, mount and unmount don't carry any data.
    Lifecycle,
}

/// A listener, identified by its allocation.
pub type Callback = Rc<dyn Fn(&EventPayload)>;

fn same_callback(x: &Callback, y: &Callback) -> bool {
    std::ptr::eq(Rc::as_ptr(x) as *const (), Rc::as_ptr(y) as *const ())
}

/// Callbacks registered for each event, in registration order. A callback
/// is registered at most once per event.
#[derive(Clone, Default)]
pub struct Listeners {
    inner: HashMap<EventKey, Vec<Callback>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback, return `false` if it was already registered for
    /// this event.
    ///
    /// ```
    /// use std::rc::Rc;
    /// use native_calendar::events::Listeners;
    /// use native_calendar::{Callback, EventKey};
    ///
    /// let callback: Callback = Rc::new(|_| {});
    /// let mut listeners = Listeners::new();
    ///
    /// assert!(listeners.add(EventKey::OnSelect, callback.clone()));
    /// assert!(!listeners.add(EventKey::OnSelect, callback.clone()));
    /// assert!(listeners.add(EventKey::OnChange, callback));
    /// assert_eq!(listeners.count(EventKey::OnSelect), 1);
    /// ```
    pub fn add(&mut self, event: EventKey, callback: Callback) -> bool {
        let callbacks = self.inner.entry(event).or_default();

        if callbacks.iter().any(|x| same_callback(x, &callback)) {
            return false;
        }

        callbacks.push(callback);
        true
    }

    /// Register several callbacks, return the number of new registrations.
    pub fn extend(&mut self, event: EventKey, callbacks: impl IntoIterator<Item = Callback>) -> usize {
        callbacks
            .into_iter()
            .filter(|callback| self.add(event, callback.clone()))
            .count()
    }

    /// Unregister a callback, return `false` if it was not registered.
    pub fn remove(&mut self, event: EventKey, callback: &Callback) -> bool {
        let Some(callbacks) = self.inner.get_mut(&event) else {
            return false;
        };

        let len_before = callbacks.len();
        callbacks.retain(|x| !same_callback(x, callback));
        callbacks.len() != len_before
    }

    /// Number of callbacks registered for an event.
    pub fn count(&self, event: EventKey) -> usize {
        self.inner.get(&event).map(Vec::len).unwrap_or(0)
    }

    /// Unregister all callbacks.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Call all callbacks registered for an event. A callback that panics
    /// does not prevent the following ones from running. Return the number
    /// of callbacks that completed.
    pub fn emit(&self, event: EventKey, payload: &EventPayload) -> usize {
        let Some(callbacks) = self.inner.get(&event) else {
            return 0;
        };

        #[cfg(feature = "log")]
        log::trace!("Emit {event} to {} listeners", callbacks.len());

        callbacks
            .iter()
            .filter(|callback| {
                let res = catch_unwind(AssertUnwindSafe(|| callback(payload)));

                if res.is_err() {
                    #[cfg(feature = "log")]
                    log::error!("A listener for {event} panicked");
                }

                res.is_ok()
            })
            .count()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.inner.iter().map(|(key, callbacks)| (key, callbacks.len())))
            .finish()
    }
}
