//! Error types for vulcan_tui.

use std::fmt;
use std::io;

/// Result type alias for vulcan_tui operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for vulcan_tui operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing rendered output.
    Io(io::Error),
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// Time components out of range (hour 0-23, minute 0-59).
    InvalidTime { hour: u8, minute: u8 },
    /// Minute step not one of 1, 5, 10, 15, 20, 30.
    InvalidMinuteStep(u8),
    /// Unparsable time string.
    InvalidTimeFormat(String),
    /// Navigation target not registered with the router.
    UnknownRoute(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::InvalidTime { hour, minute } => {
                write!(f, "invalid time: {hour:02}:{minute:02}")
            }
            Self::InvalidMinuteStep(step) => write!(f, "invalid minute step: {step}"),
            Self::InvalidTimeFormat(s) => write!(f, "unparsable time: {s:?}"),
            Self::UnknownRoute(path) => write!(f, "unknown route: {path}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
