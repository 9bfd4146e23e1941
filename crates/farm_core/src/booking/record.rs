//! Booking row as consumed by availability resolution.

use super::status::{BookingStatus, PaymentStatus};

/// A single-day booking row from the booking store.
///
/// Only `date` and `status` matter for availability. `date` is the raw
/// `YYYY-MM-DD` text; a row without one never matches any calendar day.
/// `status` is kept verbatim so an unrecognized value can be surfaced unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    pub id: Option<String>,
    pub date: Option<String>,
    pub status: String,
    pub payment_status: Option<String>,
}

impl BookingRecord {
    /// Record with just a date and a status, the shape availability needs.
    pub fn new(date: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: None,
            date: Some(date.into()),
            status: status.into(),
            payment_status: None,
        }
    }

    /// Record whose date is missing or null upstream.
    pub fn undated(status: impl Into<String>) -> Self {
        Self {
            id: None,
            date: None,
            status: status.into(),
            payment_status: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_payment_status(mut self, payment_status: impl Into<String>) -> Self {
        self.payment_status = Some(payment_status.into());
        self
    }

    pub fn status(&self) -> BookingStatus {
        BookingStatus::parse(&self.status)
    }

    /// Parsed payment status; a missing value reads as `Pending`.
    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
            .as_deref()
            .map(PaymentStatus::parse)
            .unwrap_or(PaymentStatus::Pending)
    }

    /// True when the row's date text equals `key` exactly.
    pub fn falls_on(&self, key: &str) -> bool {
        self.date.as_deref() == Some(key)
    }
}
