//! Per-day availability: date keys, the status resolver, bookability, the
//! pre-indexed snapshot used for calendar rendering, and cell presentation.

pub mod bookable;
pub mod cell;
pub mod date_key;
pub mod fingerprint;
pub mod index;
pub mod resolver;

pub use bookable::{Bookability, BlockingPolicy, check_bookable, is_date_bookable};
pub use cell::{CalendarCell, CellTone};
pub use date_key::{DateKey, DateKeyError, local_today};
pub use fingerprint::{format_fingerprint, record_digest, snapshot_fingerprint};
pub use index::{AvailabilityIndex, DateAvailability};
pub use resolver::{ResolvedStatus, resolve_date_status};
