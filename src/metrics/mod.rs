//! KPI aggregation and period comparison.
//!
//! Every ratio here has a defined value for a zero denominator: average
//! ticket and goal attainment are 0, deltas follow
//! [`comparator::percentage_delta`]. An empty window is a valid input and
//! produces an all-zero snapshot.

pub mod aggregator;
pub mod breakdown;
pub mod comparator;

pub use aggregator::{aggregate_window, average_ticket, WindowTotals};
pub use breakdown::{
    breakdown_by, week_of_month_distribution, weekday_distribution, GroupSummary,
    WeekOfMonthTotal, WeekdayTotal,
};
pub use comparator::{percentage_delta, KpiComparison};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Transaction;
use comparator::as_f64;

/// Attainment of an externally supplied sales goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalAttainment {
    pub goal: Decimal,
    /// `total / goal * 100`, 0 when the goal is not positive.
    pub percentage: f64,
    /// Always 0: there is no goal history to compare against.
    pub delta_percentage: f64,
}

impl GoalAttainment {
    pub fn new(total: Decimal, goal: Decimal) -> Self {
        Self {
            goal,
            percentage: goal_attainment(total, goal),
            delta_percentage: 0.0,
        }
    }
}

/// KPI set of the current window compared with the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub total_value: KpiComparison<Decimal>,
    pub deal_count: KpiComparison<usize>,
    pub average_ticket: KpiComparison<Decimal>,
    pub units_sold: KpiComparison<Decimal>,
    pub active_customers: KpiComparison<usize>,
    pub active_salespeople: KpiComparison<usize>,
    pub goal_attainment: GoalAttainment,
}

impl MetricsSnapshot {
    /// Pair two window aggregates into a snapshot.
    pub fn from_totals(current: &WindowTotals, previous: &WindowTotals, goal: Decimal) -> Self {
        Self {
            total_value: KpiComparison::from_decimals(current.total_value, previous.total_value),
            deal_count: KpiComparison::from_counts(current.deal_count, previous.deal_count),
            average_ticket: KpiComparison::from_decimals(
                current.average_ticket,
                previous.average_ticket,
            ),
            units_sold: KpiComparison::from_decimals(current.units_sold, previous.units_sold),
            active_customers: KpiComparison::from_counts(
                current.active_customers,
                previous.active_customers,
            ),
            active_salespeople: KpiComparison::from_counts(
                current.active_salespeople,
                previous.active_salespeople,
            ),
            goal_attainment: GoalAttainment::new(current.total_value, goal),
        }
    }
}

/// Aggregate both windows and compare them.
pub fn compare_windows<'a, 'b>(
    current: impl IntoIterator<Item = &'a Transaction>,
    previous: impl IntoIterator<Item = &'b Transaction>,
    goal: Decimal,
) -> MetricsSnapshot {
    let current = aggregate_window(current);
    let previous = aggregate_window(previous);
    MetricsSnapshot::from_totals(&current, &previous, goal)
}

/// `total / goal * 100`, 0 when the goal is zero or negative.
pub fn goal_attainment(total: Decimal, goal: Decimal) -> f64 {
    if goal <= Decimal::ZERO {
        return 0.0;
    }
    let percentage = as_f64(total) / as_f64(goal) * 100.0;
    if percentage.is_finite() {
        percentage
    } else {
        0.0
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn transactions(cents: &[u32]) -> Vec<Transaction> {
        let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        cents
            .iter()
            .enumerate()
            .map(|(i, c)| Transaction::new(format!("C{}", i % 4), "Ana", Decimal::new(i64::from(*c), 2), date))
            .collect()
    }

    proptest! {
        #[test]
        fn average_ticket_is_total_over_count(cents in prop::collection::vec(0u32..1_000_000, 0..50)) {
            let data = transactions(&cents);
            let totals = aggregate_window(&data);
            if data.is_empty() {
                prop_assert_eq!(totals.average_ticket, Decimal::ZERO);
            } else {
                prop_assert_eq!(totals.average_ticket, totals.total_value / Decimal::from(data.len()));
            }
        }

        #[test]
        fn snapshot_deltas_are_finite(
            current in prop::collection::vec(0u32..1_000_000, 0..30),
            previous in prop::collection::vec(0u32..1_000_000, 0..30),
        ) {
            let current = transactions(&current);
            let previous = transactions(&previous);
            let snapshot = compare_windows(&current, &previous, Decimal::new(100_000, 0));
            prop_assert!(snapshot.total_value.delta_percentage.is_finite());
            prop_assert!(snapshot.average_ticket.delta_percentage.is_finite());
            prop_assert!(snapshot.goal_attainment.percentage.is_finite());
        }
    }
}
