//! Tests for booking snapshot loading.

use std::time::{SystemTime, UNIX_EPOCH};

use farm_core::availability::{DateKey, ResolvedStatus};
use farm_infra::store::{BookingSnapshotStore, StoreError};

fn temp_path(tag: &str) -> std::path::PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "farm_bookings_{tag}_{}_{}.json",
        std::process::id(),
        nanos
    ))
}

fn key(raw: &str) -> DateKey {
    DateKey::parse(raw).unwrap()
}

#[test]
fn test_parse_json_array_ignores_extra_columns() {
    let text = r#"[
        {"id": 17, "date": "2026-11-01", "status": "Pending", "customer_id": "c1", "total_amount": 15000},
        {"id": "b-2", "date": "2026-11-01", "status": "Confirmed", "payment_status": "Paid"},
        {"id": null, "date": null, "status": "Confirmed"}
    ]"#;
    let snapshot = BookingSnapshotStore::new(100).parse_str(text, "inline").unwrap();

    assert_eq!(snapshot.skipped_rows, 0);
    assert_eq!(snapshot.records.len(), 3);
    assert_eq!(snapshot.records[0].id.as_deref(), Some("17"));
    assert_eq!(snapshot.records[1].id.as_deref(), Some("b-2"));
    assert_eq!(snapshot.records[1].payment_status.as_deref(), Some("Paid"));
    assert_eq!(snapshot.records[2].id, None);
    assert_eq!(snapshot.records[2].date, None);

    let index = snapshot.index();
    assert_eq!(index.resolve(&key("2026-11-01")), ResolvedStatus::Approved);
    assert_eq!(index.undated_count(), 1);
}

#[test]
fn test_parse_json_lines_skips_bad_rows() {
    let text = "\
{\"date\": \"2026-11-02\", \"status\": \"Rejected\"}

not json at all
{\"date\": \"2026-11-02\"}
{\"date\": \"2026-11-02\", \"status\": \"Pending\"}
";
    let snapshot = BookingSnapshotStore::new(100).parse_str(text, "inline").unwrap();
    assert_eq!(snapshot.records.len(), 2);
    assert_eq!(snapshot.skipped_rows, 2);
    assert_eq!(
        snapshot.index().resolve(&key("2026-11-02")),
        ResolvedStatus::Pending
    );
}

#[test]
fn test_empty_input_gives_empty_snapshot() {
    let store = BookingSnapshotStore::new(10);
    for text in ["", "   \n\n", "[]"] {
        let snapshot = store.parse_str(text, "inline").unwrap();
        assert!(snapshot.records.is_empty());
        assert_eq!(
            snapshot.index().resolve(&key("2026-01-01")),
            ResolvedStatus::Available
        );
    }
}

#[test]
fn test_broken_array_is_parse_error() {
    let err = BookingSnapshotStore::new(10)
        .parse_str("[{\"date\": ", "bookings.json")
        .unwrap_err();
    match err {
        StoreError::Parse { source, .. } => assert_eq!(source, "bookings.json"),
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn test_row_limit_enforced() {
    let store = BookingSnapshotStore::new(2);
    let text = r#"[{"date":"2026-01-01","status":"Pending"},{"date":"2026-01-02","status":"Pending"},{"date":"2026-01-03","status":"Pending"}]"#;
    assert_eq!(
        store.parse_str(text, "inline").unwrap_err(),
        StoreError::TooManyRows { rows: 3, max: 2 }
    );
    assert_eq!(store.max_rows(), 2);
}

#[test]
fn test_load_from_file() {
    let path = temp_path("load");
    std::fs::write(
        &path,
        "{\"date\":\"2026-12-24\",\"status\":\"Unavailable\"}\n{\"date\":\"2026-12-24\",\"status\":\"Pending\"}\n",
    )
    .unwrap();

    let snapshot = BookingSnapshotStore::new(100).load(&path).unwrap();
    assert_eq!(
        snapshot.index().resolve(&key("2026-12-24")),
        ResolvedStatus::Unavailable
    );
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let path = temp_path("missing");
    let err = BookingSnapshotStore::new(100).load(&path).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}
