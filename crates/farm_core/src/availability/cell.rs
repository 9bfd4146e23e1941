//! Calendar cell presentation: a tone per resolved status plus the label.

use super::date_key::DateKey;
use super::resolver::ResolvedStatus;

/// Visual category for a day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellTone {
    Green,
    Blue,
    Yellow,
    Red,
    Orange,
    /// Statuses outside the named set.
    Gray,
}

impl CellTone {
    pub fn for_status(status: &ResolvedStatus) -> Self {
        match status {
            ResolvedStatus::Available => CellTone::Green,
            ResolvedStatus::Approved => CellTone::Blue,
            ResolvedStatus::Pending => CellTone::Yellow,
            ResolvedStatus::Unavailable => CellTone::Red,
            ResolvedStatus::Rejected => CellTone::Orange,
            ResolvedStatus::Other(_) => CellTone::Gray,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CellTone::Green => "green",
            CellTone::Blue => "blue",
            CellTone::Yellow => "yellow",
            CellTone::Red => "red",
            CellTone::Orange => "orange",
            CellTone::Gray => "gray",
        }
    }
}

/// Everything the calendar needs to draw one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: DateKey,
    pub status: ResolvedStatus,
    pub label: String,
    pub tone: CellTone,
}

impl CalendarCell {
    pub fn new(date: DateKey, status: ResolvedStatus) -> Self {
        Self {
            label: status.cell_label(),
            tone: CellTone::for_status(&status),
            date,
            status,
        }
    }
}
