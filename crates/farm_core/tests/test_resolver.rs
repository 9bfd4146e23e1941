//! Tests for per-day availability resolution.
//!
//! Precedence: Approved > Unavailable > Pending > Rejected > first raw status.

mod common;

use common::{key, rec};
use farm_core::availability::{ResolvedStatus, resolve_date_status};
use farm_core::booking::BookingRecord;

const D: &str = "2026-11-14";

// ─── Empty and isolated inputs ──────────────────────────────────────────

#[test]
fn test_no_records_is_available() {
    assert_eq!(
        resolve_date_status(&key(2026, 11, 14), &[]),
        ResolvedStatus::Available
    );
}

#[test]
fn test_records_on_other_dates_do_not_leak() {
    let records = vec![
        rec("2026-11-13", "Confirmed"),
        rec("2026-11-15", "Unavailable"),
    ];
    assert_eq!(
        resolve_date_status(&key(2026, 11, 14), &records),
        ResolvedStatus::Available
    );
    assert_eq!(
        resolve_date_status(&key(2026, 11, 13), &records),
        ResolvedStatus::Approved
    );
    assert_eq!(
        resolve_date_status(&key(2026, 11, 15), &records),
        ResolvedStatus::Unavailable
    );
}

#[test]
fn test_undated_records_never_match() {
    let records = vec![BookingRecord::undated("Confirmed")];
    assert_eq!(
        resolve_date_status(&key(2026, 11, 14), &records),
        ResolvedStatus::Available
    );
}

#[test]
fn test_non_padded_date_text_does_not_match() {
    // Matching is string equality on the zero-padded form.
    let records = vec![rec("2026-11-4", "Confirmed")];
    assert_eq!(
        resolve_date_status(&key(2026, 11, 4), &records),
        ResolvedStatus::Available
    );
}

// ─── Precedence ─────────────────────────────────────────────────────────

#[test]
fn test_approved_beats_pending_in_either_order() {
    let forward = vec![rec(D, "Pending"), rec(D, "Confirmed")];
    let reverse = vec![rec(D, "Confirmed"), rec(D, "Pending")];
    assert_eq!(
        resolve_date_status(&key(2026, 11, 14), &forward),
        ResolvedStatus::Approved
    );
    assert_eq!(
        resolve_date_status(&key(2026, 11, 14), &reverse),
        ResolvedStatus::Approved
    );
}

#[test]
fn test_approved_alias_resolves_to_approved() {
    let records = vec![rec(D, "Approved")];
    assert_eq!(
        resolve_date_status(&key(2026, 11, 14), &records),
        ResolvedStatus::Approved
    );
}

#[test]
fn test_approved_beats_unavailable() {
    let records = vec![rec(D, "Unavailable"), rec(D, "Approved")];
    assert_eq!(
        resolve_date_status(&key(2026, 11, 14), &records),
        ResolvedStatus::Approved
    );
}

#[test]
fn test_unavailable_beats_pending_and_rejected() {
    let records = vec![rec(D, "Rejected"), rec(D, "Unavailable"), rec(D, "Pending")];
    assert_eq!(
        resolve_date_status(&key(2026, 11, 14), &records),
        ResolvedStatus::Unavailable
    );
}

#[test]
fn test_rejected_alone_then_pending_flips_it() {
    let mut records = vec![rec(D, "Rejected")];
    assert_eq!(
        resolve_date_status(&key(2026, 11, 14), &records),
        ResolvedStatus::Rejected
    );

    records.push(rec(D, "Pending"));
    assert_eq!(
        resolve_date_status(&key(2026, 11, 14), &records),
        ResolvedStatus::Pending
    );
}

#[test]
fn test_precedence_ignores_record_counts() {
    // Many pendings do not outvote one confirmation.
    let mut records: Vec<BookingRecord> = (0..10).map(|_| rec(D, "Pending")).collect();
    records.push(rec(D, "Confirmed"));
    assert_eq!(
        resolve_date_status(&key(2026, 11, 14), &records),
        ResolvedStatus::Approved
    );
}

#[test]
fn test_not_most_recent_wins() {
    // History Pending -> Confirmed -> Cancelled as separate rows still shows Approved.
    let records = vec![rec(D, "Pending"), rec(D, "Confirmed"), rec(D, "Cancelled")];
    assert_eq!(
        resolve_date_status(&key(2026, 11, 14), &records),
        ResolvedStatus::Approved
    );
}

// ─── Fallback ───────────────────────────────────────────────────────────

#[test]
fn test_unknown_status_is_returned_verbatim() {
    let records = vec![rec(D, "SomeNewStatus")];
    let resolved = resolve_date_status(&key(2026, 11, 14), &records);
    assert_eq!(resolved, ResolvedStatus::Other("SomeNewStatus".to_string()));
    assert_eq!(resolved.label(), "SomeNewStatus");
}

#[test]
fn test_fallback_uses_first_matching_record() {
    let records = vec![
        rec("2026-11-13", "Archived"),
        rec(D, "Cancelled"),
        rec(D, "Refund Requested"),
    ];
    assert_eq!(
        resolve_date_status(&key(2026, 11, 14), &records),
        ResolvedStatus::Other("Cancelled".to_string())
    );
}

#[test]
fn test_status_matching_is_case_sensitive() {
    let records = vec![rec(D, "confirmed")];
    assert_eq!(
        resolve_date_status(&key(2026, 11, 14), &records),
        ResolvedStatus::Other("confirmed".to_string())
    );
}

// ─── Determinism ────────────────────────────────────────────────────────

#[test]
fn test_resolution_is_idempotent() {
    let records = vec![rec(D, "Pending"), rec(D, "Rejected"), rec("2026-11-15", "Confirmed")];
    let first = resolve_date_status(&key(2026, 11, 14), &records);
    let second = resolve_date_status(&key(2026, 11, 14), &records);
    assert_eq!(first, second);
    assert_eq!(first, ResolvedStatus::Pending);
    assert_eq!(records.len(), 3);
}

// ─── Labels ─────────────────────────────────────────────────────────────

#[test]
fn test_cell_labels_uppercase_booked_statuses_only() {
    assert_eq!(ResolvedStatus::Available.cell_label(), "Available");
    assert_eq!(ResolvedStatus::Approved.cell_label(), "APPROVED");
    assert_eq!(ResolvedStatus::Pending.cell_label(), "PENDING");
    assert_eq!(ResolvedStatus::Unavailable.cell_label(), "UNAVAILABLE");
    assert_eq!(ResolvedStatus::Rejected.cell_label(), "REJECTED");
    assert_eq!(
        ResolvedStatus::Other("On Hold".to_string()).cell_label(),
        "ON HOLD"
    );
}
