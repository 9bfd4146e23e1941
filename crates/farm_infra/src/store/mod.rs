//! File-backed stores: booking snapshots and the local staff session.

pub mod bookings;
pub mod session;

use std::fmt;

pub use bookings::{BookingRow, BookingSnapshot, BookingSnapshotStore};
pub use session::{LocalSessionStore, StoredProfile};

/// Error returned when a store operation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Io { path: String, reason: String },
    /// The file as a whole could not be parsed.
    Parse { source: String, reason: String },
    /// Snapshot holds more rows than the configured limit.
    TooManyRows { rows: usize, max: usize },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, reason } => write!(f, "store i/o failed for {path}: {reason}"),
            Self::Parse { source, reason } => write!(f, "cannot parse {source}: {reason}"),
            Self::TooManyRows { rows, max } => {
                write!(f, "booking snapshot has {rows} rows, limit is {max}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

pub(crate) fn io_error(path: &std::path::Path, err: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
