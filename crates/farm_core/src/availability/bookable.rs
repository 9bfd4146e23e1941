//! Whether a calendar day can take a new booking.
//!
//! A day strictly before `today` is never bookable; `today` itself is. Past
//! that, the caller decides which resolved statuses block a new booking. The
//! reference product blocks none of them: the calendar only labels a day as
//! Pending/Approved/etc., and submission rejects past dates alone.

use chrono::NaiveDate;

use super::date_key::DateKey;
use super::resolver::{ResolvedStatus, resolve_date_status};
use crate::booking::BookingRecord;

/// Resolved statuses that prevent a new booking on a day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockingPolicy {
    blocked: Vec<ResolvedStatus>,
}

impl BlockingPolicy {
    /// Reference behaviour: only past dates block.
    pub fn reference() -> Self {
        Self::default()
    }

    /// Block days already taken or closed by the venue.
    pub fn terminal() -> Self {
        Self::blocking([ResolvedStatus::Approved, ResolvedStatus::Unavailable])
    }

    pub fn blocking(statuses: impl IntoIterator<Item = ResolvedStatus>) -> Self {
        Self {
            blocked: statuses.into_iter().collect(),
        }
    }

    pub fn blocks(&self, status: &ResolvedStatus) -> bool {
        self.blocked.contains(status)
    }
}

/// Outcome of a bookability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bookability {
    Bookable { status: ResolvedStatus },
    PastDate,
    Blocked { status: ResolvedStatus },
}

impl Bookability {
    pub fn is_bookable(&self) -> bool {
        matches!(self, Bookability::Bookable { .. })
    }
}

/// Classify `date` for a new booking. Comparison is by calendar day.
pub fn check_bookable(
    date: &DateKey,
    records: &[BookingRecord],
    today: NaiveDate,
    policy: &BlockingPolicy,
) -> Bookability {
    if date.date() < today {
        return Bookability::PastDate;
    }
    let status = resolve_date_status(date, records);
    if policy.blocks(&status) {
        Bookability::Blocked { status }
    } else {
        Bookability::Bookable { status }
    }
}

pub fn is_date_bookable(
    date: &DateKey,
    records: &[BookingRecord],
    today: NaiveDate,
    policy: &BlockingPolicy,
) -> bool {
    check_bookable(date, records, today, policy).is_bookable()
}
