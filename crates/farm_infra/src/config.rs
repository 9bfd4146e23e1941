//! Runtime configuration with built-in defaults.
//!
//! Every parameter has a default. A parameter that is present but invalid
//! (non-finite, out of range, fractional where a count is expected) fails the
//! load instead of silently falling back.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use chrono::FixedOffset;
use farm_core::payment::{PollSettings, RedirectOutcome, SUCCESS_AUTO_CLOSE};
use serde::Deserialize;

/// Configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigParam {
    // Payment polling
    PaymentPollIntervalMs,
    PaymentPollTimeoutS,
    PaymentPollMaxErrors,
    PaymentSuccessAutoCloseS,

    // Venue calendar
    VenueUtcOffsetMinutes,

    // Booking snapshot
    BookingSnapshotMaxRows,
}

/// Error when a parameter is missing with no default, or present but invalid.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingConfigError {
    pub param_name: &'static str,
    pub reason: &'static str,
}

impl fmt::Display for MissingConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "config fail-closed: '{}' cannot be resolved ({})",
            self.param_name, self.reason
        )
    }
}

impl std::error::Error for MissingConfigError {}

/// Largest real-world UTC offset, in minutes (UTC+14:00 / UTC-12:00 fit inside).
pub const MAX_UTC_OFFSET_MINUTES: f64 = 14.0 * 60.0;

/// Default for a parameter, or `None` if it has none.
pub fn config_default(param: ConfigParam) -> Option<f64> {
    match param {
        ConfigParam::PaymentPollIntervalMs => Some(3000.0),
        ConfigParam::PaymentPollTimeoutS => Some(900.0),
        ConfigParam::PaymentPollMaxErrors => Some(5.0),
        ConfigParam::PaymentSuccessAutoCloseS => Some(SUCCESS_AUTO_CLOSE.as_secs_f64()),
        // Venue operates at UTC+08:00.
        ConfigParam::VenueUtcOffsetMinutes => Some(480.0),
        ConfigParam::BookingSnapshotMaxRows => Some(100_000.0),
    }
}

/// snake_case key used in config files.
pub fn param_name(param: ConfigParam) -> &'static str {
    match param {
        ConfigParam::PaymentPollIntervalMs => "payment_poll_interval_ms",
        ConfigParam::PaymentPollTimeoutS => "payment_poll_timeout_s",
        ConfigParam::PaymentPollMaxErrors => "payment_poll_max_errors",
        ConfigParam::PaymentSuccessAutoCloseS => "payment_success_auto_close_s",
        ConfigParam::VenueUtcOffsetMinutes => "venue_utc_offset_minutes",
        ConfigParam::BookingSnapshotMaxRows => "booking_snapshot_max_rows",
    }
}

/// Expected number of ConfigParam variants. Update when adding new variants.
pub const EXPECTED_PARAM_COUNT: usize = 6;

/// All known `ConfigParam` variants (for exhaustive iteration in tests).
pub const ALL_PARAMS: &[ConfigParam] = &[
    ConfigParam::PaymentPollIntervalMs,
    ConfigParam::PaymentPollTimeoutS,
    ConfigParam::PaymentPollMaxErrors,
    ConfigParam::PaymentSuccessAutoCloseS,
    ConfigParam::VenueUtcOffsetMinutes,
    ConfigParam::BookingSnapshotMaxRows,
];

fn allows_negative(param: ConfigParam) -> bool {
    matches!(param, ConfigParam::VenueUtcOffsetMinutes)
}

fn requires_whole_number(param: ConfigParam) -> bool {
    matches!(
        param,
        ConfigParam::PaymentPollMaxErrors
            | ConfigParam::VenueUtcOffsetMinutes
            | ConfigParam::BookingSnapshotMaxRows
    )
}

/// Resolve a configuration value.
///
/// - `Some(v)` is validated and returned (explicit config takes precedence).
/// - `None` falls back to the default.
/// - `None` without a default is an error.
pub fn resolve_config_value(
    param: ConfigParam,
    value: Option<f64>,
) -> Result<f64, MissingConfigError> {
    let fail = |reason| MissingConfigError {
        param_name: param_name(param),
        reason,
    };

    let Some(v) = value else {
        return config_default(param).ok_or_else(|| fail("no default; fail-closed"));
    };

    if !v.is_finite() {
        return Err(fail("value is non-finite (NaN or Infinity); fail-closed"));
    }
    if v < 0.0 && !allows_negative(param) {
        return Err(fail("value is negative; parameter must be non-negative"));
    }
    if requires_whole_number(param) && v.fract() != 0.0 {
        return Err(fail("value must be a whole number"));
    }
    if param == ConfigParam::VenueUtcOffsetMinutes && v.abs() > MAX_UTC_OFFSET_MINUTES {
        return Err(fail("offset is outside -14h..+14h"));
    }
    Ok(v)
}

/// Raw config file contents; every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    pub payment_poll_interval_ms: Option<f64>,
    pub payment_poll_timeout_s: Option<f64>,
    pub payment_poll_max_errors: Option<f64>,
    pub payment_success_auto_close_s: Option<f64>,
    pub venue_utc_offset_minutes: Option<f64>,
    pub booking_snapshot_max_rows: Option<f64>,
}

impl RawConfig {
    pub fn value(&self, param: ConfigParam) -> Option<f64> {
        match param {
            ConfigParam::PaymentPollIntervalMs => self.payment_poll_interval_ms,
            ConfigParam::PaymentPollTimeoutS => self.payment_poll_timeout_s,
            ConfigParam::PaymentPollMaxErrors => self.payment_poll_max_errors,
            ConfigParam::PaymentSuccessAutoCloseS => self.payment_success_auto_close_s,
            ConfigParam::VenueUtcOffsetMinutes => self.venue_utc_offset_minutes,
            ConfigParam::BookingSnapshotMaxRows => self.booking_snapshot_max_rows,
        }
    }
}

/// Error loading a config file.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigLoadError {
    Io { path: String, reason: String },
    Parse { reason: String },
    Invalid(MissingConfigError),
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, reason } => write!(f, "cannot read config {path}: {reason}"),
            Self::Parse { reason } => write!(f, "invalid config json: {reason}"),
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ConfigLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MissingConfigError> for ConfigLoadError {
    fn from(err: MissingConfigError) -> Self {
        Self::Invalid(err)
    }
}

fn duration_from_secs(param: ConfigParam, secs: f64) -> Result<Duration, MissingConfigError> {
    Duration::try_from_secs_f64(secs).map_err(|_| MissingConfigError {
        param_name: param_name(param),
        reason: "value does not fit in a duration",
    })
}

/// Resolved, typed configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmConfig {
    pub payment_poll_interval: Duration,
    pub payment_poll_timeout: Duration,
    pub payment_poll_max_errors: u32,
    pub payment_success_auto_close: Duration,
    pub venue_offset: FixedOffset,
    pub booking_snapshot_max_rows: usize,
}

impl FarmConfig {
    pub fn from_raw(raw: &RawConfig) -> Result<Self, MissingConfigError> {
        let get = |param| resolve_config_value(param, raw.value(param));

        let max_errors = get(ConfigParam::PaymentPollMaxErrors)?;
        if max_errors < 1.0 || max_errors > f64::from(u32::MAX) {
            return Err(MissingConfigError {
                param_name: param_name(ConfigParam::PaymentPollMaxErrors),
                reason: "value must be at least 1",
            });
        }

        let offset_minutes = get(ConfigParam::VenueUtcOffsetMinutes)?;
        let venue_offset =
            FixedOffset::east_opt(offset_minutes as i32 * 60).ok_or(MissingConfigError {
                param_name: param_name(ConfigParam::VenueUtcOffsetMinutes),
                reason: "offset is not representable",
            })?;

        Ok(Self {
            payment_poll_interval: duration_from_secs(
                ConfigParam::PaymentPollIntervalMs,
                get(ConfigParam::PaymentPollIntervalMs)? / 1000.0,
            )?,
            payment_poll_timeout: duration_from_secs(
                ConfigParam::PaymentPollTimeoutS,
                get(ConfigParam::PaymentPollTimeoutS)?,
            )?,
            payment_poll_max_errors: max_errors as u32,
            payment_success_auto_close: duration_from_secs(
                ConfigParam::PaymentSuccessAutoCloseS,
                get(ConfigParam::PaymentSuccessAutoCloseS)?,
            )?,
            venue_offset,
            booking_snapshot_max_rows: get(ConfigParam::BookingSnapshotMaxRows)? as usize,
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigLoadError> {
        let raw: RawConfig = serde_json::from_str(text).map_err(|e| ConfigLoadError::Parse {
            reason: e.to_string(),
        })?;
        Ok(Self::from_raw(&raw)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&text)
    }

    pub fn poll_settings(&self) -> PollSettings {
        PollSettings {
            interval: self.payment_poll_interval,
            timeout: self.payment_poll_timeout,
            max_consecutive_errors: self.payment_poll_max_errors,
        }
    }

    /// How long the gateway return page stays up for `outcome`.
    pub fn auto_close_after(&self, outcome: RedirectOutcome) -> Option<Duration> {
        outcome.auto_close_after(self.payment_success_auto_close)
    }
}
