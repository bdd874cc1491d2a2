//! Customer positivation: how much of the customer base bought in a window.

use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::core::Transaction;

/// Where the reference population came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Baseline {
    /// Supplied by the caller from the customer master.
    Explicit,
    /// No customer count was supplied; the active count stands in for it,
    /// so the percentage can only be 0 or 100.
    SelfReferential,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Positivation {
    pub active_count: usize,
    pub reference_population: usize,
    pub percentage: f64,
    pub baseline: Baseline,
}

/// Count distinct customers with at least one transaction.
///
/// `salesperson` restricts the count to one salesperson's transactions.
/// `total_customers` is the reference population; without it the result
/// falls back to a self-referential baseline. An explicit total below the
/// active count is kept as given, so the percentage exceeds 100.
pub fn calculate_positivation<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    salesperson: Option<&str>,
    total_customers: Option<usize>,
) -> Positivation {
    let active: HashSet<&str> = transactions
        .into_iter()
        .filter(|tx| salesperson.map_or(true, |name| tx.salesperson == name))
        .map(|tx| tx.customer_id.as_str())
        .collect();
    let active_count = active.len();

    let (reference_population, baseline) = match total_customers {
        Some(total) => {
            if total < active_count {
                warn!(
                    total,
                    active_count,
                    "Customer total is below the active count, positivation exceeds 100%"
                );
            }
            (total, Baseline::Explicit)
        }
        None => {
            debug!(
                active_count,
                "No customer total supplied, positivation uses active count as baseline"
            );
            (active_count, Baseline::SelfReferential)
        }
    };

    let percentage = if reference_population == 0 {
        0.0
    } else {
        active_count as f64 / reference_population as f64 * 100.0
    };

    Positivation {
        active_count,
        reference_population,
        percentage,
        baseline,
    }
}
