#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod calendar;
pub mod error;
pub mod events;
pub mod fields;
pub mod grid;
pub mod localization;
pub mod options;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::calendar::{Calendar, DATE_END, DATE_START};
pub use crate::error::Error;
pub use crate::events::{Callback, EventKey, EventPayload};
pub use crate::fields::{Edit, Field, FieldInput, FieldKey};
pub use crate::localization::Locale;
pub use crate::options::{Options, PickerType};
pub use crate::state::{CoreState, DateState, Picker, Selection};
pub use crate::view::{Frame, NoView, View};
pub use calendar_math::{FirstWeekDay, MonthShift};
pub use native_calendar_syntax::DateHash;
