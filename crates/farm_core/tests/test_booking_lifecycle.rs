//! Tests for the booking status vocabulary and transition graph.

use farm_core::booking::{BookingLifecycle, BookingStatus, PaymentStatus};

#[test]
fn test_status_parsing_and_aliases() {
    assert_eq!(BookingStatus::parse("Pending"), BookingStatus::Pending);
    assert_eq!(BookingStatus::parse("Confirmed"), BookingStatus::Confirmed);
    assert_eq!(BookingStatus::parse("Approved"), BookingStatus::Confirmed);
    assert_eq!(
        BookingStatus::parse("Refund Requested"),
        BookingStatus::RefundRequested
    );
    assert_eq!(
        BookingStatus::parse("refund requested"),
        BookingStatus::Other("refund requested".to_string())
    );
    assert_eq!(BookingStatus::RefundRequested.as_str(), "Refund Requested");
    assert_eq!(BookingStatus::Other("X".to_string()).as_str(), "X");
}

#[test]
fn test_terminal_statuses() {
    assert!(BookingStatus::Unavailable.is_terminal());
    assert!(BookingStatus::Cancelled.is_terminal());
    for s in [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Rejected,
        BookingStatus::RefundRequested,
    ] {
        assert!(!s.is_terminal(), "{s:?} must not be terminal");
    }
}

#[test]
fn test_valid_transitions() {
    use BookingStatus::*;
    assert!(BookingLifecycle::is_valid_successor(&Pending, &Confirmed));
    assert!(BookingLifecycle::is_valid_successor(&Pending, &Rejected));
    assert!(BookingLifecycle::is_valid_successor(&Pending, &Cancelled));
    assert!(BookingLifecycle::is_valid_successor(&Confirmed, &RefundRequested));
    assert!(BookingLifecycle::is_valid_successor(&Confirmed, &Cancelled));
}

#[test]
fn test_invalid_transitions() {
    use BookingStatus::*;
    assert!(!BookingLifecycle::is_valid_successor(&Pending, &RefundRequested));
    assert!(!BookingLifecycle::is_valid_successor(&Confirmed, &Pending));
    assert!(!BookingLifecycle::is_valid_successor(&Rejected, &Confirmed));
    assert!(!BookingLifecycle::is_valid_successor(&Cancelled, &Pending));
    assert!(!BookingLifecycle::is_valid_successor(&Unavailable, &Pending));
    assert!(BookingLifecycle::successors(&RefundRequested).is_empty());
}

#[test]
fn test_first_invalid_step() {
    use BookingStatus::*;
    assert_eq!(BookingLifecycle::first_invalid_step(&[]), None);
    assert_eq!(BookingLifecycle::first_invalid_step(&[Pending]), None);
    assert_eq!(
        BookingLifecycle::first_invalid_step(&[Pending, Confirmed, RefundRequested]),
        None
    );
    assert_eq!(
        BookingLifecycle::first_invalid_step(&[Pending, Confirmed, Pending]),
        Some(2)
    );
    assert_eq!(
        BookingLifecycle::first_invalid_step(&[Rejected, Confirmed]),
        Some(1)
    );
}

#[test]
fn test_payment_status_parsing() {
    assert_eq!(PaymentStatus::parse("Paid"), PaymentStatus::Paid);
    assert_eq!(PaymentStatus::parse("Partial"), PaymentStatus::Partial);
    assert_eq!(PaymentStatus::parse("Pending"), PaymentStatus::Pending);
    assert!(PaymentStatus::Paid.has_funds());
    assert!(PaymentStatus::Partial.has_funds());
    assert!(!PaymentStatus::Pending.has_funds());
    assert!(!PaymentStatus::parse("Refunded").has_funds());
}
