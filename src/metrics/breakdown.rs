//! Per-group and calendar distributions for the dashboard charts.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::Serialize;

use super::comparator::as_f64;
use crate::core::{ranked_group_totals, KeyExtractor, Transaction};

/// One row of a value breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub key: String,
    pub total_value: Decimal,
    pub deal_count: usize,
    /// Share of the breakdown's grand total, 0 when the total is 0.
    pub share_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayTotal {
    pub weekday: Weekday,
    pub total_value: Decimal,
    pub deal_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekOfMonthTotal {
    pub week: u32,
    pub total_value: Decimal,
    pub deal_count: usize,
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Value per key, highest first, ties in first-seen order.
pub fn breakdown_by<'a, K>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    key: &K,
) -> Vec<GroupSummary>
where
    K: KeyExtractor + ?Sized,
{
    let groups = ranked_group_totals(transactions, key);
    let grand_total: Decimal = groups.iter().map(|g| g.total_value).sum();
    let grand_total = as_f64(grand_total);

    groups
        .into_iter()
        .map(|group| GroupSummary {
            share_percentage: share(as_f64(group.total_value), grand_total),
            key: group.key,
            total_value: group.total_value,
            deal_count: group.occurrences,
        })
        .collect()
}

/// Totals for each weekday, Monday first; days without sales are zero rows.
pub fn weekday_distribution<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<WeekdayTotal> {
    let mut rows: Vec<WeekdayTotal> = WEEKDAYS
        .iter()
        .map(|&weekday| WeekdayTotal {
            weekday,
            total_value: Decimal::ZERO,
            deal_count: 0,
        })
        .collect();

    for tx in transactions {
        let row = &mut rows[tx.weekday.num_days_from_monday() as usize];
        row.total_value += tx.value;
        row.deal_count += 1;
    }
    rows
}

/// Totals for week-of-month 1 through 5; empty weeks are zero rows.
pub fn week_of_month_distribution<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<WeekOfMonthTotal> {
    let mut rows: Vec<WeekOfMonthTotal> = (1..=5)
        .map(|week| WeekOfMonthTotal {
            week,
            total_value: Decimal::ZERO,
            deal_count: 0,
        })
        .collect();

    for tx in transactions {
        let index = tx.week_of_month.clamp(1, 5) as usize - 1;
        let row = &mut rows[index];
        row.total_value += tx.value;
        row.deal_count += 1;
    }
    rows
}

pub(crate) fn share(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}
