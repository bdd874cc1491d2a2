//! Period resolution: turns a period selector into the current window and
//! the window it is compared against.
//!
//! Resolution never fails. A selector that cannot be understood falls back
//! to "the whole collection, no comparison" and logs a warning.

mod window;

pub use window::{DateRange, PeriodWindow, Window};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::core::calendar::{days_before, month_bounds, previous_month};

/// Trailing day counts the dashboard offers.
pub const RELATIVE_RANGES: [u32; 4] = [7, 30, 90, 365];

/// A parsed period selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PeriodSelector {
    /// The last N days, ending today.
    LastDays { days: u32 },
    /// Today's calendar month, compared with the month before.
    CurrentMonth,
    Month { year: i32, month: u32 },
    /// Explicit range; has no comparison window.
    Custom(DateRange),
    /// Anything that could not be understood, kept for diagnostics.
    Unrecognized { raw: Option<String> },
}

impl PeriodSelector {
    /// Parse the dashboard's selector string.
    ///
    /// Accepts `"7" | "30" | "90" | "365" | "current_month" | "custom" |
    /// "YYYY-MM"`. `"custom"` takes its bounds from `custom_range`; a
    /// missing or reversed range is unrecognized.
    pub fn parse(raw: Option<&str>, custom_range: Option<(NaiveDate, NaiveDate)>) -> Self {
        let Some(text) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
            return Self::Unrecognized { raw: None };
        };

        let unrecognized = || Self::Unrecognized {
            raw: Some(text.to_string()),
        };

        match text {
            "current_month" => Self::CurrentMonth,
            "custom" => custom_range
                .and_then(|(from, to)| DateRange::new(from, to))
                .map(Self::Custom)
                .unwrap_or_else(unrecognized),
            _ => {
                if let Ok(days) = text.parse::<u32>() {
                    return if RELATIVE_RANGES.contains(&days) {
                        Self::LastDays { days }
                    } else {
                        unrecognized()
                    };
                }
                parse_year_month(text)
                    .map(|(year, month)| Self::Month { year, month })
                    .unwrap_or_else(unrecognized)
            }
        }
    }
}

impl fmt::Display for PeriodSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastDays { days } => write!(f, "{}", days),
            Self::CurrentMonth => write!(f, "current_month"),
            Self::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Custom(range) => write!(f, "custom({}..={})", range.start, range.end),
            Self::Unrecognized { raw: Some(raw) } => write!(f, "unrecognized({})", raw),
            Self::Unrecognized { raw: None } => write!(f, "unspecified"),
        }
    }
}

fn parse_year_month(text: &str) -> Option<(i32, u32)> {
    let (year, month) = text.split_once('-')?;
    if year.len() != 4 || !(1..=2).contains(&month.len()) {
        return None;
    }
    let year = year.parse::<i32>().ok()?;
    let month = month.parse::<u32>().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// Resolve a selector relative to `today`.
pub fn resolve_period(selector: &PeriodSelector, today: NaiveDate) -> PeriodWindow {
    let resolved = match selector {
        PeriodSelector::LastDays { days } => trailing_days(*days, today),
        PeriodSelector::CurrentMonth => month_window(today.year(), today.month()),
        PeriodSelector::Month { year, month } => month_window(*year, *month),
        // Deserialized selectors bypass `DateRange::new`, so recheck order
        PeriodSelector::Custom(range) => (range.start <= range.end).then_some(PeriodWindow {
            current: Window::Range(*range),
            previous: Window::Empty,
        }),
        PeriodSelector::Unrecognized { .. } => None,
    };

    resolved.unwrap_or_else(|| {
        warn!(%selector, "Unusable period selector, using the whole collection");
        PeriodWindow::everything()
    })
}

/// Parse and resolve in one step.
pub fn resolve_selector(
    raw: Option<&str>,
    custom_range: Option<(NaiveDate, NaiveDate)>,
    today: NaiveDate,
) -> PeriodWindow {
    resolve_period(&PeriodSelector::parse(raw, custom_range), today)
}

fn month_window(year: i32, month: u32) -> Option<PeriodWindow> {
    let (start, end) = month_bounds(year, month)?;
    let (prev_year, prev_month) = previous_month(year, month);
    let (prev_start, prev_end) = month_bounds(prev_year, prev_month)?;
    Some(PeriodWindow {
        current: Window::Range(DateRange { start, end }),
        previous: Window::Range(DateRange {
            start: prev_start,
            end: prev_end,
        }),
    })
}

fn trailing_days(days: u32, today: NaiveDate) -> Option<PeriodWindow> {
    if days == 0 {
        return None;
    }
    let days = u64::from(days);
    let start = days_before(today, days - 1)?;
    let prev_end = days_before(start, 1)?;
    let prev_start = days_before(prev_end, days - 1)?;
    Some(PeriodWindow {
        current: Window::Range(DateRange { start, end: today }),
        previous: Window::Range(DateRange {
            start: prev_start,
            end: prev_end,
        }),
    })
}
