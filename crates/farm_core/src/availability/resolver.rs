//! Availability resolver: one display status per calendar day.
//!
//! **Precedence** (first match wins, regardless of record count or order):
//! 1. any `Confirmed`/`Approved` -> `Approved`
//! 2. any `Unavailable`          -> `Unavailable`
//! 3. any `Pending`              -> `Pending`
//! 4. any `Rejected`             -> `Rejected`
//! 5. otherwise the first matching record's raw status, verbatim
//!
//! No matching record -> `Available`. Records without a date never match.
//! Pure and total: no errors, no state, same input gives same output.

use super::date_key::DateKey;
use crate::booking::{BookingRecord, BookingStatus};

/// Resolved display status for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedStatus {
    Available,
    Approved,
    Unavailable,
    Pending,
    Rejected,
    /// Fallback: raw status of the first matching record.
    Other(String),
}

impl ResolvedStatus {
    pub fn label(&self) -> &str {
        match self {
            ResolvedStatus::Available => "Available",
            ResolvedStatus::Approved => "Approved",
            ResolvedStatus::Unavailable => "Unavailable",
            ResolvedStatus::Pending => "Pending",
            ResolvedStatus::Rejected => "Rejected",
            ResolvedStatus::Other(raw) => raw,
        }
    }

    /// Label as printed on a calendar cell: booked days are uppercased.
    pub fn cell_label(&self) -> String {
        match self {
            ResolvedStatus::Available => self.label().to_string(),
            booked => booked.label().to_uppercase(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ResolvedStatus::Available)
    }
}

/// Classify `date` against a snapshot of booking records.
pub fn resolve_date_status(date: &DateKey, records: &[BookingRecord]) -> ResolvedStatus {
    resolve_matching(records.iter().filter(|r| r.falls_on(date.as_str())))
}

/// Apply the precedence to records already known to fall on one day.
pub(crate) fn resolve_matching<'a, I>(matching: I) -> ResolvedStatus
where
    I: IntoIterator<Item = &'a BookingRecord>,
{
    let mut first: Option<&BookingRecord> = None;
    let mut approved = false;
    let mut unavailable = false;
    let mut pending = false;
    let mut rejected = false;

    for record in matching {
        first.get_or_insert(record);
        match record.status() {
            BookingStatus::Confirmed => approved = true,
            BookingStatus::Unavailable => unavailable = true,
            BookingStatus::Pending => pending = true,
            BookingStatus::Rejected => rejected = true,
            _ => {}
        }
    }

    let Some(first) = first else {
        return ResolvedStatus::Available;
    };

    if approved {
        ResolvedStatus::Approved
    } else if unavailable {
        ResolvedStatus::Unavailable
    } else if pending {
        ResolvedStatus::Pending
    } else if rejected {
        ResolvedStatus::Rejected
    } else {
        tracing::debug!(
            "AvailabilityFallback date={:?} status={:?}",
            first.date,
            first.status
        );
        ResolvedStatus::Other(first.status.clone())
    }
}
