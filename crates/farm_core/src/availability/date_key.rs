//! `YYYY-MM-DD` date keys.
//!
//! Booking rows store their day as text, and matching is plain string equality.
//! Keys built from a timestamp MUST use the timestamp's own local calendar
//! fields. Converting to UTC first shifts late-evening and early-morning
//! instants onto the neighbouring day for any venue not at UTC+00:00.

use std::fmt;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Utc};

/// Error for text that is not a zero-padded `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateKeyError {
    pub input: String,
}

impl fmt::Display for DateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a YYYY-MM-DD calendar date", self.input)
    }
}

impl std::error::Error for DateKeyError {}

/// A calendar day together with its canonical `YYYY-MM-DD` text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey {
    date: NaiveDate,
    text: String,
}

impl DateKey {
    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            text: format_ymd(date.year(), date.month(), date.day()),
            date,
        }
    }

    /// Key for the local calendar day of `instant` in its own timezone.
    pub fn from_local<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self {
            text: format_ymd(instant.year(), instant.month(), instant.day()),
            date: instant.date_naive(),
        }
    }

    /// Parse stored booking text. Only the exact zero-padded form is accepted.
    ///
    /// chrono tolerates space padding (`2026-02- 8`), so the parsed key must
    /// print back to `raw` unchanged. Anything else could never match a
    /// calendar day by string equality.
    pub fn parse(raw: &str) -> Result<Self, DateKeyError> {
        let invalid = || DateKeyError {
            input: raw.to_string(),
        };
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())?;
        let key = Self::from_naive(date);
        if key.as_str() != raw {
            return Err(invalid());
        }
        Ok(key)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The venue's calendar date at `now`.
pub fn local_today(now: DateTime<Utc>, venue_offset: FixedOffset) -> NaiveDate {
    now.with_timezone(&venue_offset).date_naive()
}

fn format_ymd(year: i32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}
