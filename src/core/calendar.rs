//! Calendar helpers shared by the normalizer and the period resolver.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime};

/// Week index within the month, `ceil(day / 7)`.
pub fn week_of_month(date: NaiveDate) -> u32 {
    date.day().div_ceil(7)
}

/// Parse a transaction date.
///
/// Accepted shapes:
/// - `YYYY-MM-DD`
/// - `DD/MM/YYYY`
/// - RFC 3339 timestamps (`2025-11-03T14:22:00-03:00`), local date kept
/// - naive ISO timestamps (`2025-11-03T14:22:00`, `2025-11-03 14:22:00.123`)
///
/// Returns `None` for anything else, including impossible dates such as
/// `2025-02-30`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.date_naive())
                .ok()
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
                .map(|dt| dt.date())
                .ok()
        })
}

/// First and last day of a calendar month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    Some((first, last))
}

/// The calendar month before `(year, month)`.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// `date - days`, `None` on calendar underflow.
pub fn days_before(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(days))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_of_month_uses_ceiling_of_day_over_seven() {
        assert_eq!(week_of_month(ymd(2025, 3, 1)), 1);
        assert_eq!(week_of_month(ymd(2025, 3, 7)), 1);
        assert_eq!(week_of_month(ymd(2025, 3, 8)), 2);
        assert_eq!(week_of_month(ymd(2025, 3, 28)), 4);
        assert_eq!(week_of_month(ymd(2025, 3, 29)), 5);
        assert_eq!(week_of_month(ymd(2025, 3, 31)), 5);
    }

    #[test]
    fn parses_supported_shapes() {
        assert_eq!(parse_date("2025-11-03"), Some(ymd(2025, 11, 3)));
        assert_eq!(parse_date("03/11/2025"), Some(ymd(2025, 11, 3)));
        assert_eq!(
            parse_date("2025-11-03T23:10:00-03:00"),
            Some(ymd(2025, 11, 3))
        );
        assert_eq!(parse_date("2025-11-03T08:00:00Z"), Some(ymd(2025, 11, 3)));
        assert_eq!(parse_date("2025-11-03T08:00:00"), Some(ymd(2025, 11, 3)));
        assert_eq!(
            parse_date("2025-11-03 08:00:00.250"),
            Some(ymd(2025, 11, 3))
        );
        assert_eq!(parse_date("  2025-11-03 "), Some(ymd(2025, 11, 3)));
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2025-02-30"), None);
        assert_eq!(parse_date("31/04/2025"), None);
    }

    #[test]
    fn month_bounds_handle_december_and_leap_years() {
        assert_eq!(
            month_bounds(2024, 12),
            Some((ymd(2024, 12, 1), ymd(2024, 12, 31)))
        );
        assert_eq!(
            month_bounds(2024, 2),
            Some((ymd(2024, 2, 1), ymd(2024, 2, 29)))
        );
        assert_eq!(month_bounds(2025, 13), None);
        assert_eq!(month_bounds(2025, 0), None);
    }

    #[test]
    fn previous_month_wraps_january() {
        assert_eq!(previous_month(2025, 1), (2024, 12));
        assert_eq!(previous_month(2025, 11), (2025, 10));
    }
}
