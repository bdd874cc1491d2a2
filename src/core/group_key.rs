//! Grouping-key extraction for classification, ranking and breakdowns.

use serde::{Deserialize, Serialize};

use super::types::Transaction;

/// Extracts the aggregation key of a transaction.
///
/// Returning `None` excludes the transaction from every group.
pub trait KeyExtractor {
    fn key<'a>(&self, tx: &'a Transaction) -> Option<&'a str>;
}

/// Built-in grouping dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    Customer,
    Salesperson,
    Product,
    State,
    Segment,
    Nature,
    Status,
}

impl GroupKey {
    pub fn label(&self) -> &'static str {
        match self {
            GroupKey::Customer => "customer",
            GroupKey::Salesperson => "salesperson",
            GroupKey::Product => "product",
            GroupKey::State => "state",
            GroupKey::Segment => "segment",
            GroupKey::Nature => "nature",
            GroupKey::Status => "status",
        }
    }
}

impl KeyExtractor for GroupKey {
    fn key<'a>(&self, tx: &'a Transaction) -> Option<&'a str> {
        match self {
            GroupKey::Customer => Some(&tx.customer_id),
            GroupKey::Salesperson => Some(&tx.salesperson),
            GroupKey::Product => tx.product.as_deref(),
            GroupKey::State => Some(&tx.state),
            GroupKey::Segment => Some(&tx.segment),
            GroupKey::Nature => Some(&tx.nature),
            GroupKey::Status => Some(&tx.status),
        }
    }
}

/// Adapter for ad-hoc extractors, see [`key_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnKey<F>(F);

impl<F> KeyExtractor for FnKey<F>
where
    F: for<'a> Fn(&'a Transaction) -> Option<&'a str>,
{
    fn key<'a>(&self, tx: &'a Transaction) -> Option<&'a str> {
        (self.0)(tx)
    }
}

/// Wrap a closure as a [`KeyExtractor`].
///
/// ```
/// use sales_analytics::core::{key_fn, KeyExtractor, Transaction};
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let by_name = key_fn(|tx| Some(tx.customer_name.as_str()));
/// let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
/// let tx = Transaction::new("C1", "Ana", dec!(5), date).with_customer_name("Acme");
/// assert_eq!(by_name.key(&tx), Some("Acme"));
/// ```
pub fn key_fn<F>(f: F) -> FnKey<F>
where
    F: for<'a> Fn(&'a Transaction) -> Option<&'a str>,
{
    FnKey(f)
}
