//! Value-per-key grouping shared by classification, ranking and breakdowns.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use super::group_key::KeyExtractor;
use super::types::Transaction;

/// Summed value and occurrence count of one grouping key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupTotal {
    pub key: String,
    pub total_value: Decimal,
    pub occurrences: usize,
}

/// Group transactions by key, in first-seen key order.
///
/// Transactions for which the extractor yields `None` are skipped.
pub fn group_totals<'a, K>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    key: &K,
) -> Vec<GroupTotal>
where
    K: KeyExtractor + ?Sized,
{
    let mut groups: Vec<GroupTotal> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for tx in transactions {
        let Some(k) = key.key(tx) else {
            continue;
        };
        let position = *positions.entry(k).or_insert_with(|| {
            groups.push(GroupTotal {
                key: k.to_string(),
                total_value: Decimal::ZERO,
                occurrences: 0,
            });
            groups.len() - 1
        });
        let group = &mut groups[position];
        group.total_value += tx.value;
        group.occurrences += 1;
    }

    groups
}

/// Group and order by summed value, highest first.
///
/// The sort is stable: keys with equal totals keep first-seen order.
pub fn ranked_group_totals<'a, K>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    key: &K,
) -> Vec<GroupTotal>
where
    K: KeyExtractor + ?Sized,
{
    let mut groups = group_totals(transactions, key);
    groups.sort_by(|a, b| b.total_value.cmp(&a.total_value));
    groups
}
