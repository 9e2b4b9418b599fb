pub(crate) mod builtin;
pub(crate) mod locale;

pub use crate::localization::locale::{Locale, Names};
