//! Booking and payment status vocabularies.
//!
//! Status values arrive as free-form strings from the booking store. Parsing is
//! exact (case-sensitive); unrecognized values are preserved in `Other` so they
//! can be shown as-is rather than dropped.

/// Lifecycle status of a booking row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Pending,
    /// Stored as either `Confirmed` or `Approved`; the two are interchangeable.
    Confirmed,
    Rejected,
    Unavailable,
    Cancelled,
    RefundRequested,
    /// Any value outside the enumerated set, kept verbatim.
    Other(String),
}

impl BookingStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Pending" => BookingStatus::Pending,
            "Confirmed" | "Approved" => BookingStatus::Confirmed,
            "Rejected" => BookingStatus::Rejected,
            "Unavailable" => BookingStatus::Unavailable,
            "Cancelled" => BookingStatus::Cancelled,
            "Refund Requested" => BookingStatus::RefundRequested,
            other => BookingStatus::Other(other.to_string()),
        }
    }

    /// Canonical wire string.
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Rejected => "Rejected",
            BookingStatus::Unavailable => "Unavailable",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::RefundRequested => "Refund Requested",
            BookingStatus::Other(raw) => raw,
        }
    }

    /// No further customer-driven transition is expected from this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Unavailable | BookingStatus::Cancelled)
    }
}

/// Payment status of a booking row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Partial,
    Other(String),
}

impl PaymentStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Pending" => PaymentStatus::Pending,
            "Paid" => PaymentStatus::Paid,
            "Partial" => PaymentStatus::Partial,
            other => PaymentStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Partial => "Partial",
            PaymentStatus::Other(raw) => raw,
        }
    }

    /// Whether any money has been received.
    pub fn has_funds(&self) -> bool {
        matches!(self, PaymentStatus::Paid | PaymentStatus::Partial)
    }
}
