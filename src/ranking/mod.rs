//! Top-N rankings.
//!
//! Ranks are ordinal: sorting is stable by value (highest first) and each
//! position gets the next rank, so tied keys receive consecutive distinct
//! ranks with the first-seen key ahead. There are no gaps and no shared
//! ranks.

pub mod positivation;

pub use positivation::{calculate_positivation, Baseline, Positivation};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{ranked_group_totals, KeyExtractor, Transaction};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    pub key: String,
    pub total_value: Decimal,
    pub occurrence_count: usize,
    /// 1-based, strictly increasing.
    pub rank: usize,
}

/// The `limit` highest-value keys, at most one entry per distinct key.
pub fn top_n<'a, K>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    key: &K,
    limit: usize,
) -> Vec<RankingEntry>
where
    K: KeyExtractor + ?Sized,
{
    ranked_group_totals(transactions, key)
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, group)| RankingEntry {
            key: group.key,
            total_value: group.total_value,
            occurrence_count: group.occurrences,
            rank: index + 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{key_fn, GroupKey};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn tx(salesperson: &str, value: Decimal) -> Transaction {
        Transaction::new(
            "C1",
            salesperson,
            value,
            NaiveDate::from_ymd_opt(2025, 10, 10).unwrap(),
        )
    }

    #[test]
    fn ranks_by_summed_value() {
        let data = vec![
            tx("Ana", dec!(100)),
            tx("Bruno", dec!(250)),
            tx("Ana", dec!(200)),
            tx("Carla", dec!(50)),
        ];

        let ranking = top_n(&data, &GroupKey::Salesperson, 10);

        assert_eq!(
            ranking,
            vec![
                RankingEntry {
                    key: "Ana".to_string(),
                    total_value: dec!(300),
                    occurrence_count: 2,
                    rank: 1
                },
                RankingEntry {
                    key: "Bruno".to_string(),
                    total_value: dec!(250),
                    occurrence_count: 1,
                    rank: 2
                },
                RankingEntry {
                    key: "Carla".to_string(),
                    total_value: dec!(50),
                    occurrence_count: 1,
                    rank: 3
                },
            ]
        );
    }

    #[test]
    fn ties_get_consecutive_ranks_in_first_seen_order() {
        let data = vec![tx("Bruno", dec!(10)), tx("Ana", dec!(10)), tx("Carla", dec!(10))];

        let ranking = top_n(&data, &GroupKey::Salesperson, 3);

        let ranks: Vec<(&str, usize)> = ranking.iter().map(|e| (e.key.as_str(), e.rank)).collect();
        assert_eq!(ranks, vec![("Bruno", 1), ("Ana", 2), ("Carla", 3)]);
    }

    #[test]
    fn limit_truncates_and_zero_is_empty() {
        let data = vec![tx("Ana", dec!(3)), tx("Bruno", dec!(2)), tx("Carla", dec!(1))];

        assert_eq!(top_n(&data, &GroupKey::Salesperson, 2).len(), 2);
        assert_eq!(top_n(&data, &GroupKey::Salesperson, 99).len(), 3);
        assert!(top_n(&data, &GroupKey::Salesperson, 0).is_empty());
    }

    #[test]
    fn accepts_custom_extractors() {
        let data = vec![
            tx("Ana", dec!(3)).with_customer_name("Acme"),
            tx("Bruno", dec!(9)).with_customer_name("Beta"),
        ];
        let by_name = key_fn(|t| Some(t.customer_name.as_str()));

        let ranking = top_n(&data, &by_name, 1);

        assert_eq!(ranking[0].key, "Beta");
    }
}
