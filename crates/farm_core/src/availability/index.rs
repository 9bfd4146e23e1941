//! Snapshot pre-indexed by date for calendar rendering.
//!
//! A month view asks for up to 42 cells per render. Scanning every record per
//! cell is O(cells * records); indexing once by date key makes each cell an
//! O(1) lookup. Records keep their snapshot order within a day so the resolver
//! fallback ("first matching record") is unchanged.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use super::cell::CalendarCell;
use super::date_key::DateKey;
use super::fingerprint::record_digest;
use super::resolver::{ResolvedStatus, resolve_matching};
use crate::booking::BookingRecord;

/// Resolved status for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateAvailability {
    pub date: DateKey,
    pub resolved_status: ResolvedStatus,
}

impl DateAvailability {
    pub fn cell(&self) -> CalendarCell {
        CalendarCell::new(self.date.clone(), self.resolved_status.clone())
    }
}

/// Immutable, date-indexed view of one booking snapshot.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityIndex {
    by_date: HashMap<String, Vec<BookingRecord>>,
    record_count: usize,
    undated_count: usize,
    fingerprint: u64,
}

impl AvailabilityIndex {
    pub fn new(records: &[BookingRecord]) -> Self {
        records.iter().cloned().collect()
    }

    pub fn resolve(&self, date: &DateKey) -> ResolvedStatus {
        match self.by_date.get(date.as_str()) {
            Some(records) => resolve_matching(records),
            None => ResolvedStatus::Available,
        }
    }

    pub fn day(&self, date: NaiveDate) -> DateAvailability {
        let key = DateKey::from_naive(date);
        DateAvailability {
            resolved_status: self.resolve(&key),
            date: key,
        }
    }

    /// One entry per day of `month` (1-12) in `year`, in calendar order.
    ///
    /// Returns `None` for a month outside 1-12.
    pub fn month_view(&self, year: i32, month: u32) -> Option<Vec<DateAvailability>> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(
            first
                .iter_days()
                .take_while(|d| d.month() == month)
                .map(|d| self.day(d))
                .collect(),
        )
    }

    /// Records on `date`, in snapshot order.
    pub fn records_on(&self, date: &DateKey) -> &[BookingRecord] {
        self.by_date
            .get(date.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct date strings that have at least one record.
    pub fn booked_day_count(&self) -> usize {
        self.by_date.len()
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Records skipped because they carry no date.
    pub fn undated_count(&self) -> usize {
        self.undated_count
    }

    /// Order-independent digest of the indexed snapshot.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

impl FromIterator<BookingRecord> for AvailabilityIndex {
    fn from_iter<I: IntoIterator<Item = BookingRecord>>(iter: I) -> Self {
        let mut index = AvailabilityIndex::default();
        for record in iter {
            index.record_count += 1;
            index.fingerprint = index.fingerprint.wrapping_add(record_digest(&record));
            match record.date.clone() {
                Some(date) => index.by_date.entry(date).or_default().push(record),
                None => index.undated_count += 1,
            }
        }
        index
    }
}
