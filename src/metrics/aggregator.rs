use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::Transaction;

/// Raw KPI values for one window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowTotals {
    pub total_value: Decimal,
    pub deal_count: usize,
    /// `total_value / deal_count`, zero for an empty window.
    pub average_ticket: Decimal,
    pub units_sold: Decimal,
    pub active_customers: usize,
    pub active_salespeople: usize,
}

/// Aggregate the KPI set of one window in a single pass.
pub fn aggregate_window<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> WindowTotals {
    let mut total_value = Decimal::ZERO;
    let mut units_sold = Decimal::ZERO;
    let mut deal_count = 0usize;
    let mut customers: HashSet<&str> = HashSet::new();
    let mut salespeople: HashSet<&str> = HashSet::new();

    for tx in transactions {
        total_value += tx.value;
        units_sold += tx.units();
        deal_count += 1;
        customers.insert(&tx.customer_id);
        salespeople.insert(&tx.salesperson);
    }

    WindowTotals {
        total_value,
        deal_count,
        average_ticket: average_ticket(total_value, deal_count),
        units_sold,
        active_customers: customers.len(),
        active_salespeople: salespeople.len(),
    }
}

/// `total / count`, zero when there are no deals.
pub fn average_ticket(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    total
        .checked_div(Decimal::from(count))
        .unwrap_or(Decimal::ZERO)
}
