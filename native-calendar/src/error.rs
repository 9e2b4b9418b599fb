use std::fmt::Display;

pub use native_calendar_syntax::Error as HashError;

/// Failure to build a calendar.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Error {
    /// The view could not find any element for the given host selector.
    HostNotFound(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HostNotFound(host) => write!(f, "No host element matches `{host}`"),
        }
    }
}

impl std::error::Error for Error {}

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnknownEventKey(pub String);

impl Display for UnknownEventKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown event `{}`", self.0)
    }
}

impl std::error::Error for UnknownEventKey {}

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnknownPickerType(pub String);

impl Display for UnknownPickerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown picker type `{}`", self.0)
    }
}

impl std::error::Error for UnknownPickerType {}
