//! Booking snapshot loading.
//!
//! Accepts either a JSON array of booking rows (as returned by the backend's
//! table query) or JSON Lines, one row per line. Only `date`, `status`, `id`
//! and `payment_status` are read; other columns are ignored. A row that
//! cannot be decoded is skipped and counted, never fatal: a bad row must not
//! take the whole calendar down.

use std::path::Path;

use farm_core::availability::{AvailabilityIndex, format_fingerprint, snapshot_fingerprint};
use farm_core::booking::BookingRecord;
use serde::Deserialize;
use serde_json::Value;

use super::{StoreError, io_error};
use crate::config::FarmConfig;

/// Booking row as stored by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookingRow {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub date: Option<String>,
    pub status: String,
    #[serde(default)]
    pub payment_status: Option<String>,
}

impl From<BookingRow> for BookingRecord {
    fn from(row: BookingRow) -> Self {
        let id = row.id.and_then(|id| match id {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        });
        BookingRecord {
            id,
            date: row.date,
            status: row.status,
            payment_status: row.payment_status,
        }
    }
}

/// Decoded rows plus how many were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingSnapshot {
    pub records: Vec<BookingRecord>,
    pub skipped_rows: usize,
}

impl BookingSnapshot {
    pub fn index(&self) -> AvailabilityIndex {
        AvailabilityIndex::new(&self.records)
    }
}

/// Loader for booking snapshots with a row limit.
#[derive(Debug, Clone)]
pub struct BookingSnapshotStore {
    max_rows: usize,
}

impl BookingSnapshotStore {
    pub fn new(max_rows: usize) -> Self {
        Self { max_rows }
    }

    /// Store limited to `booking_snapshot_max_rows`.
    pub fn from_config(config: &FarmConfig) -> Self {
        Self::new(config.booking_snapshot_max_rows)
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<BookingSnapshot, StoreError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
        self.parse_str(&text, &path.display().to_string())
    }

    /// Parse snapshot text. `source` names the input in errors and logs.
    pub fn parse_str(&self, text: &str, source: &str) -> Result<BookingSnapshot, StoreError> {
        let snapshot = if text.trim_start().starts_with('[') {
            let rows: Vec<Value> = serde_json::from_str(text).map_err(|e| StoreError::Parse {
                source: source.to_string(),
                reason: e.to_string(),
            })?;
            self.check_limit(rows.len())?;
            self.decode(
                rows.into_iter()
                    .enumerate()
                    .map(|(idx, row)| (idx + 1, serde_json::from_value::<BookingRow>(row))),
                source,
            )
        } else {
            let lines: Vec<(usize, &str)> = text
                .lines()
                .enumerate()
                .map(|(idx, line)| (idx + 1, line.trim()))
                .filter(|(_, line)| !line.is_empty())
                .collect();
            self.check_limit(lines.len())?;
            self.decode(
                lines
                    .into_iter()
                    .map(|(lineno, line)| (lineno, serde_json::from_str::<BookingRow>(line))),
                source,
            )
        };

        tracing::debug!(
            "BookingSnapshotLoaded source={} rows={} skipped={} fingerprint={}",
            source,
            snapshot.records.len(),
            snapshot.skipped_rows,
            format_fingerprint(snapshot_fingerprint(&snapshot.records))
        );
        Ok(snapshot)
    }

    fn check_limit(&self, rows: usize) -> Result<(), StoreError> {
        if rows > self.max_rows {
            return Err(StoreError::TooManyRows {
                rows,
                max: self.max_rows,
            });
        }
        Ok(())
    }

    fn decode<I>(&self, rows: I, source: &str) -> BookingSnapshot
    where
        I: Iterator<Item = (usize, serde_json::Result<BookingRow>)>,
    {
        let mut snapshot = BookingSnapshot::default();
        for (position, row) in rows {
            match row {
                Ok(row) => snapshot.records.push(row.into()),
                Err(e) => {
                    snapshot.skipped_rows += 1;
                    tracing::warn!(
                        "BookingRowSkipped source={} row={} error={}",
                        source,
                        position,
                        e
                    );
                }
            }
        }
        snapshot
    }
}
