//! Customer-initiated booking actions: cancel and refund request.
//!
//! These only decide whether the action is allowed and what status results;
//! writing the new status back is the booking store's job.

use std::fmt;

use chrono::NaiveDate;

use super::record::BookingRecord;
use super::status::BookingStatus;
use crate::availability::DateKey;

/// Why a cancel or refund request was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingActionError {
    AlreadyCancelled,
    RefundAlreadyRequested,
    /// The booking date is before today.
    DateInPast { date: NaiveDate },
    /// The booking has no usable date.
    MissingDate,
    /// Nothing has been paid, so there is nothing to refund.
    NotPaid { payment_status: String },
}

impl fmt::Display for BookingActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyCancelled => write!(f, "booking is already cancelled"),
            Self::RefundAlreadyRequested => write!(f, "a refund has already been requested"),
            Self::DateInPast { date } => write!(f, "booking date {date} is in the past"),
            Self::MissingDate => write!(f, "booking has no valid date"),
            Self::NotPaid { payment_status } => {
                write!(f, "nothing to refund (payment status '{payment_status}')")
            }
        }
    }
}

impl std::error::Error for BookingActionError {}

/// Cancel the booking, returning the status it should be written back with.
pub fn cancel(
    booking: &BookingRecord,
    today: NaiveDate,
) -> Result<BookingStatus, BookingActionError> {
    match booking.status() {
        BookingStatus::Cancelled => return Err(BookingActionError::AlreadyCancelled),
        BookingStatus::RefundRequested => return Err(BookingActionError::RefundAlreadyRequested),
        _ => {}
    }

    let date = booking
        .date
        .as_deref()
        .and_then(|raw| DateKey::parse(raw).ok())
        .ok_or(BookingActionError::MissingDate)?
        .date();

    if date < today {
        return Err(BookingActionError::DateInPast { date });
    }
    Ok(BookingStatus::Cancelled)
}

/// Request a refund, returning the status it should be written back with.
pub fn request_refund(booking: &BookingRecord) -> Result<BookingStatus, BookingActionError> {
    if booking.status() == BookingStatus::RefundRequested {
        return Err(BookingActionError::RefundAlreadyRequested);
    }
    let payment = booking.payment_status();
    if !payment.has_funds() {
        return Err(BookingActionError::NotPaid {
            payment_status: payment.as_str().to_string(),
        });
    }
    Ok(BookingStatus::RefundRequested)
}

pub fn can_cancel(booking: &BookingRecord, today: NaiveDate) -> bool {
    cancel(booking, today).is_ok()
}

pub fn can_request_refund(booking: &BookingRecord) -> bool {
    request_refund(booking).is_ok()
}
