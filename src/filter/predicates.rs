//! Pure predicate functions for filtering transactions.
//!
//! Each predicate checks one thing and takes the transaction plus the piece
//! of filter state it needs. [`super::apply_filters`] composes them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ActorScope, FilterSet};
use crate::core::Transaction;
use crate::period::Window;

/// A filterable transaction attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Salesperson,
    Nature,
    Segment,
    Status,
    State,
}

impl Dimension {
    /// Evaluation order of the explicit filter.
    pub const ALL: [Dimension; 5] = [
        Dimension::Salesperson,
        Dimension::Nature,
        Dimension::Segment,
        Dimension::Status,
        Dimension::State,
    ];

    pub fn value_of<'a>(&self, tx: &'a Transaction) -> &'a str {
        match self {
            Dimension::Salesperson => &tx.salesperson,
            Dimension::Nature => &tx.nature,
            Dimension::Segment => &tx.segment,
            Dimension::Status => &tx.status,
            Dimension::State => &tx.state,
        }
    }

    pub fn allowed<'f>(&self, filters: &'f FilterSet) -> &'f [String] {
        match self {
            Dimension::Salesperson => &filters.salespeople,
            Dimension::Nature => &filters.natures,
            Dimension::Segment => &filters.segments,
            Dimension::Status => &filters.statuses,
            Dimension::State => &filters.states,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Salesperson => "salesperson",
            Dimension::Nature => "nature",
            Dimension::Segment => "segment",
            Dimension::Status => "status",
            Dimension::State => "state",
        };
        f.write_str(name)
    }
}

/// Check the actor's visibility scope.
#[inline]
pub fn is_in_scope(tx: &Transaction, scope: &ActorScope) -> bool {
    match scope {
        ActorScope::Unrestricted => true,
        ActorScope::Salesperson { name } => tx.salesperson == *name,
    }
}

/// Exact-match membership; an empty list allows everything.
#[inline]
pub fn matches_allowed(value: &str, allowed: &[String]) -> bool {
    allowed.is_empty() || allowed.iter().any(|candidate| candidate == value)
}

/// First dimension whose non-empty allowed list rejects the transaction.
pub fn first_rejecting_dimension(tx: &Transaction, filters: &FilterSet) -> Option<Dimension> {
    Dimension::ALL
        .into_iter()
        .find(|dimension| !matches_allowed(dimension.value_of(tx), dimension.allowed(filters)))
}

/// Check the transaction against every dimension of the filter set.
#[inline]
pub fn matches_filters(tx: &Transaction, filters: &FilterSet) -> bool {
    first_rejecting_dimension(tx, filters).is_none()
}

#[inline]
pub fn is_in_window(tx: &Transaction, window: &Window) -> bool {
    window.contains(tx.date)
}
