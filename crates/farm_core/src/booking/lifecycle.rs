//! Booking status transition graph.
//!
//! **Transitions:** `Pending -> Confirmed | Rejected | Cancelled`,
//! `Confirmed -> RefundRequested | Cancelled`.
//!
//! The graph is enforced by the booking store and the administrative workflow,
//! not here. Availability resolution never consults it: a day with several
//! historical rows is classified by fixed precedence, not by the most recent
//! transition. This module exists so callers can flag history that does not fit.

use super::status::BookingStatus;

/// Namespace for the booking lifecycle rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingLifecycle;

impl BookingLifecycle {
    /// Statuses reachable in one step from `from`.
    pub fn successors(from: &BookingStatus) -> &'static [BookingStatus] {
        const FROM_PENDING: &[BookingStatus] = &[
            BookingStatus::Confirmed,
            BookingStatus::Rejected,
            BookingStatus::Cancelled,
        ];
        const FROM_CONFIRMED: &[BookingStatus] =
            &[BookingStatus::RefundRequested, BookingStatus::Cancelled];

        match from {
            BookingStatus::Pending => FROM_PENDING,
            BookingStatus::Confirmed => FROM_CONFIRMED,
            _ => &[],
        }
    }

    pub fn is_valid_successor(from: &BookingStatus, to: &BookingStatus) -> bool {
        Self::successors(from).contains(to)
    }

    /// Index of the first step in `history` that is not a valid transition.
    ///
    /// Returns `None` when every consecutive pair is allowed (including empty
    /// and single-entry histories).
    pub fn first_invalid_step(history: &[BookingStatus]) -> Option<usize> {
        history
            .windows(2)
            .position(|pair| !Self::is_valid_successor(&pair[0], &pair[1]))
            .map(|idx| idx + 1)
    }
}
