//! Snapshot fingerprint for booking lists.
//!
//! `fingerprint = sum(xxhash64(date + status))` over every record, wrapping.
//! The sum makes the digest independent of row order while still counting
//! duplicates, so a re-fetched snapshot with the same rows in a different
//! order does not force a calendar re-render.

use xxhash_rust::xxh64::xxh64;

use crate::booking::BookingRecord;

/// Marker in place of the date for rows with no date. Not valid UTF-8, so it
/// cannot collide with a real date string.
const UNDATED_MARKER: u8 = 0xFE;
const FIELD_SEPARATOR: u8 = 0xFF;

/// Digest of the availability-relevant fields of one record.
pub fn record_digest(record: &BookingRecord) -> u64 {
    let mut buf = Vec::with_capacity(32);
    match record.date.as_deref() {
        Some(date) => buf.extend_from_slice(date.as_bytes()),
        None => buf.push(UNDATED_MARKER),
    }
    buf.push(FIELD_SEPARATOR);
    buf.extend_from_slice(record.status.as_bytes());
    xxh64(&buf, 0)
}

/// Order-independent digest of a whole snapshot.
pub fn snapshot_fingerprint<'a, I>(records: I) -> u64
where
    I: IntoIterator<Item = &'a BookingRecord>,
{
    records
        .into_iter()
        .fold(0u64, |acc, record| acc.wrapping_add(record_digest(record)))
}

pub fn format_fingerprint(fingerprint: u64) -> String {
    format!("{fingerprint:016x}")
}
