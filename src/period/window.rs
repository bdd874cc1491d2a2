use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// `None` when `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// One side of a period comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Window {
    /// Every transaction, whatever its date.
    All,
    Range(DateRange),
    /// Matches nothing.
    Empty,
}

impl Window {
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Window::All => true,
            Window::Range(range) => range.contains(date),
            Window::Empty => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Window::Empty)
    }

    pub fn range(&self) -> Option<&DateRange> {
        match self {
            Window::Range(range) => Some(range),
            _ => None,
        }
    }
}

/// The current window and the window it is compared against.
///
/// When both are ranges, `previous` ends the day before `current` starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    pub current: Window,
    pub previous: Window,
}

impl PeriodWindow {
    /// The whole collection as `current`, nothing to compare against.
    pub fn everything() -> Self {
        Self {
            current: Window::All,
            previous: Window::Empty,
        }
    }

    pub fn has_comparison(&self) -> bool {
        !self.previous.is_empty()
    }
}
