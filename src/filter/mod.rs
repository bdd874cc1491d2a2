//! Dimension filtering.
//!
//! Role scoping is applied first and cannot be widened by the explicit
//! filter. The explicit filter is a pure conjunction: a transaction passes
//! only if it matches every dimension whose allowed list is non-empty.
//! Window membership is checked last. Output keeps the input order.

pub mod predicates;

pub use predicates::Dimension;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::Transaction;
use crate::period::Window;
use predicates::{first_rejecting_dimension, is_in_scope, is_in_window};

/// Allowed values per dimension. Empty lists do not restrict.
///
/// Field names also accept the dashboard's filter-state keys
/// (`vendedores`, `naturezas`, `segmentos`, `status`, `estados`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default, alias = "vendedores")]
    pub salespeople: Vec<String>,
    #[serde(default, alias = "naturezas")]
    pub natures: Vec<String>,
    #[serde(default, alias = "segmentos")]
    pub segments: Vec<String>,
    #[serde(default, alias = "status")]
    pub statuses: Vec<String>,
    #[serde(default, alias = "estados")]
    pub states: Vec<String>,
}

impl FilterSet {
    /// No dimension is restricted.
    pub fn is_unrestricted(&self) -> bool {
        Dimension::ALL
            .iter()
            .all(|dimension| dimension.allowed(self).is_empty())
    }
}

/// Who is looking at the data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum ActorScope {
    /// Managers and administrators see every transaction.
    #[default]
    Unrestricted,
    /// A salesperson only ever sees their own transactions.
    Salesperson { name: String },
}

impl ActorScope {
    pub fn salesperson(name: impl Into<String>) -> Self {
        Self::Salesperson { name: name.into() }
    }
}

/// Why transactions were dropped by a filter pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterStatistics {
    pub total_processed: usize,
    pub filtered_by_scope: usize,
    pub filtered_by_dimension: BTreeMap<Dimension, usize>,
    pub filtered_by_window: usize,
    pub accepted: usize,
}

impl FilterStatistics {
    pub fn total_filtered(&self) -> usize {
        self.filtered_by_scope
            + self.filtered_by_dimension.values().sum::<usize>()
            + self.filtered_by_window
    }

    /// Percentage of processed transactions that passed.
    pub fn acceptance_rate(&self) -> f64 {
        if self.total_processed == 0 {
            return 0.0;
        }
        (self.accepted as f64 / self.total_processed as f64) * 100.0
    }
}

/// Transactions that passed a filter pass, in input order.
#[derive(Debug, Clone, Default)]
pub struct Filtered<'a> {
    pub transactions: Vec<&'a Transaction>,
    pub stats: FilterStatistics,
}

impl<'a> Filtered<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a Transaction> + '_ {
        self.transactions.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Apply scope and explicit filters, ignoring dates.
pub fn apply_filters<'a>(
    transactions: &'a [Transaction],
    filters: &FilterSet,
    scope: &ActorScope,
) -> Filtered<'a> {
    filter_window(transactions, filters, scope, &Window::All)
}

/// Apply scope, explicit filters, then window membership.
pub fn filter_window<'a>(
    transactions: &'a [Transaction],
    filters: &FilterSet,
    scope: &ActorScope,
    window: &Window,
) -> Filtered<'a> {
    let mut stats = FilterStatistics {
        total_processed: transactions.len(),
        ..Default::default()
    };

    let passed = transactions
        .iter()
        .filter(|tx| {
            if !is_in_scope(tx, scope) {
                stats.filtered_by_scope += 1;
                return false;
            }
            if let Some(dimension) = first_rejecting_dimension(tx, filters) {
                *stats.filtered_by_dimension.entry(dimension).or_insert(0) += 1;
                return false;
            }
            if !is_in_window(tx, window) {
                stats.filtered_by_window += 1;
                return false;
            }
            true
        })
        .collect::<Vec<_>>();

    stats.accepted = passed.len();
    Filtered {
        transactions: passed,
        stats,
    }
}
