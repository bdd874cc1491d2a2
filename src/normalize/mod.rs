//! Transaction normalization.
//!
//! Turns raw sale records, as delivered by the data-loading layer, into
//! [`Transaction`]s with a parsed date and resolved customer attributes.
//! Bad records are dropped and reported; they never abort the batch.

mod amount;
mod lookup;

pub use amount::RawAmount;
pub use lookup::{CustomerIndex, CustomerLookup, CustomerRecord};

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::core::calendar::{parse_date, week_of_month};
use crate::core::{Transaction, UNCLASSIFIED};

/// A sale record as it arrives from the transaction source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSale {
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub salesperson: Option<String>,
    #[serde(default)]
    pub value: Option<RawAmount>,
    #[serde(default)]
    pub quantity: Option<RawAmount>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub nature: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Why a raw record was left out of the normalized batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    MissingField { field: &'static str },
    UnparseableDate { raw: String },
    InvalidValue { raw: String },
    NegativeValue { value: Decimal },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "missing required field `{}`", field),
            Self::UnparseableDate { raw } => write!(f, "unparseable date `{}`", raw),
            Self::InvalidValue { raw } => write!(f, "invalid value `{}`", raw),
            Self::NegativeValue { value } => write!(f, "negative value {}", value),
        }
    }
}

/// A dropped record: its position in the input batch and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRecord {
    pub index: usize,
    pub reason: RejectionReason,
}

/// Result of normalizing a batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NormalizedBatch {
    pub transactions: Vec<Transaction>,
    pub rejected: Vec<RejectedRecord>,
}

impl NormalizedBatch {
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    pub fn accepted_count(&self) -> usize {
        self.transactions.len()
    }
}

/// Normalize a single record.
pub fn normalize_sale(
    raw: &RawSale,
    customers: &impl CustomerLookup,
) -> Result<Transaction, RejectionReason> {
    let customer_id = required(&raw.customer_id, "customer_id")?;
    let salesperson = required(&raw.salesperson, "salesperson")?;
    let raw_date = required(&raw.date, "date")?;
    let date = parse_date(raw_date).ok_or_else(|| RejectionReason::UnparseableDate {
        raw: raw_date.to_string(),
    })?;
    let value = resolve_value(raw.value.as_ref())?;

    let quantity = raw.quantity.as_ref().and_then(|q| {
        let parsed = q.to_decimal();
        if parsed.is_none() {
            debug!(customer_id, quantity = ?q, "Ignoring unparseable quantity");
        }
        parsed
    });

    let customer = customers.find(customer_id);
    let customer_name = customer
        .and_then(|c| non_blank(c.name.as_deref()))
        .or_else(|| non_blank(raw.customer_name.as_deref()))
        .unwrap_or(customer_id);

    Ok(Transaction {
        customer_id: customer_id.to_string(),
        customer_name: customer_name.to_string(),
        salesperson: salesperson.to_string(),
        value,
        quantity,
        product: non_blank(raw.product.as_deref()).map(str::to_string),
        nature: classified(raw.nature.as_deref()),
        segment: classified(customer.and_then(|c| c.segment.as_deref())),
        status: classified(customer.and_then(|c| c.status.as_deref())),
        state: classified(customer.and_then(|c| c.state.as_deref())),
        weekday: date.weekday(),
        week_of_month: week_of_month(date),
        date,
    })
}

/// Normalize a batch, collecting rejections instead of failing.
pub fn normalize_batch(raw: &[RawSale], customers: &impl CustomerLookup) -> NormalizedBatch {
    let mut batch = NormalizedBatch {
        transactions: Vec::with_capacity(raw.len()),
        rejected: Vec::new(),
    };

    for (index, record) in raw.iter().enumerate() {
        match normalize_sale(record, customers) {
            Ok(tx) => batch.transactions.push(tx),
            Err(reason) => {
                debug!(index, %reason, "Dropping malformed sale record");
                batch.rejected.push(RejectedRecord { index, reason });
            }
        }
    }

    if !batch.rejected.is_empty() {
        warn!(
            rejected = batch.rejected.len(),
            accepted = batch.transactions.len(),
            "Dropped malformed sale records during normalization"
        );
    }

    batch
}

fn required<'a>(
    field: &'a Option<String>,
    name: &'static str,
) -> Result<&'a str, RejectionReason> {
    non_blank(field.as_deref()).ok_or(RejectionReason::MissingField { field: name })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn classified(value: Option<&str>) -> String {
    non_blank(value).unwrap_or(UNCLASSIFIED).to_string()
}

fn resolve_value(raw: Option<&RawAmount>) -> Result<Decimal, RejectionReason> {
    let raw = raw.ok_or(RejectionReason::MissingField { field: "value" })?;
    let value = raw.to_decimal().ok_or_else(|| RejectionReason::InvalidValue {
        raw: raw.to_string(),
    })?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(RejectionReason::NegativeValue { value });
    }
    Ok(value.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn customers() -> CustomerIndex {
        CustomerIndex::from_records(vec![CustomerRecord {
            id: "C1".to_string(),
            name: Some("Mercado Azul".to_string()),
            segment: Some("Varejo".to_string()),
            state: Some("SP".to_string()),
            status: Some("ativo".to_string()),
        }])
    }

    fn sale(customer: &str, date: &str, value: RawAmount) -> RawSale {
        RawSale {
            customer_id: Some(customer.to_string()),
            salesperson: Some("Ana".to_string()),
            value: Some(value),
            date: Some(date.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn resolves_customer_attributes_from_lookup() {
        let tx = normalize_sale(
            &sale("C1", "2025-11-10", RawAmount::Number(150.0)),
            &customers(),
        )
        .unwrap();

        assert_eq!(tx.customer_name, "Mercado Azul");
        assert_eq!(tx.segment, "Varejo");
        assert_eq!(tx.state, "SP");
        assert_eq!(tx.status, "ativo");
        assert_eq!(tx.value, dec!(150.00));
        assert_eq!(tx.week_of_month, 2);
    }

    #[test]
    fn unknown_customer_gets_unclassified_sentinel() {
        let mut raw = sale("C404", "2025-11-10", RawAmount::Number(10.0));
        raw.customer_name = Some("Loja Nova".to_string());
        let tx = normalize_sale(&raw, &customers()).unwrap();

        assert_eq!(tx.customer_name, "Loja Nova");
        assert_eq!(tx.segment, UNCLASSIFIED);
        assert_eq!(tx.state, UNCLASSIFIED);
        assert_eq!(tx.status, UNCLASSIFIED);
        assert_eq!(tx.nature, UNCLASSIFIED);
    }

    #[test]
    fn customer_name_falls_back_to_identifier() {
        let tx = normalize_sale(
            &sale("C404", "2025-11-10", RawAmount::Number(10.0)),
            &customers(),
        )
        .unwrap();
        assert_eq!(tx.customer_name, "C404");
    }

    #[test]
    fn rejects_unparseable_date() {
        let result = normalize_sale(
            &sale("C1", "31/02/2025", RawAmount::Number(10.0)),
            &customers(),
        );
        assert_eq!(
            result,
            Err(RejectionReason::UnparseableDate {
                raw: "31/02/2025".to_string()
            })
        );
    }

    #[test]
    fn rejects_missing_required_fields() {
        let mut raw = sale("C1", "2025-11-10", RawAmount::Number(10.0));
        raw.salesperson = Some("   ".to_string());
        assert_eq!(
            normalize_sale(&raw, &customers()),
            Err(RejectionReason::MissingField {
                field: "salesperson"
            })
        );

        let mut raw = sale("C1", "2025-11-10", RawAmount::Number(10.0));
        raw.value = None;
        assert_eq!(
            normalize_sale(&raw, &customers()),
            Err(RejectionReason::MissingField { field: "value" })
        );
    }

    #[test]
    fn rejects_negative_and_invalid_values() {
        assert_eq!(
            normalize_sale(
                &sale("C1", "2025-11-10", RawAmount::Text("-5,00".to_string())),
                &customers()
            ),
            Err(RejectionReason::NegativeValue { value: dec!(-5.00) })
        );
        assert_eq!(
            normalize_sale(
                &sale("C1", "2025-11-10", RawAmount::Text("abc".to_string())),
                &customers()
            ),
            Err(RejectionReason::InvalidValue {
                raw: "abc".to_string()
            })
        );
    }

    #[test]
    fn rejects_values_with_mixed_separators() {
        for text in ["1,234.56", "1.234"] {
            assert_eq!(
                normalize_sale(
                    &sale("C1", "2025-11-10", RawAmount::Text(text.to_string())),
                    &customers()
                ),
                Err(RejectionReason::InvalidValue {
                    raw: text.to_string()
                })
            );
        }
    }

    #[test]
    fn unparseable_quantity_is_treated_as_missing() {
        let mut raw = sale("C1", "2025-11-10", RawAmount::Number(10.0));
        raw.quantity = Some(RawAmount::Text("n/a".to_string()));
        let tx = normalize_sale(&raw, &customers()).unwrap();
        assert_eq!(tx.quantity, None);
    }

    #[test]
    fn batch_keeps_good_records_and_counts_bad_ones() {
        let raw = vec![
            sale("C1", "2025-11-10", RawAmount::Number(10.0)),
            sale("C1", "not a date", RawAmount::Number(10.0)),
            sale("C2", "2025-11-11", RawAmount::Number(20.0)),
            sale("C2", "2025-11-11", RawAmount::Number(-1.0)),
        ];

        let batch = normalize_batch(&raw, &customers());

        assert_eq!(batch.accepted_count(), 2);
        assert_eq!(batch.rejected_count(), 2);
        assert_eq!(
            batch.rejected.iter().map(|r| r.index).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(batch.transactions[0].customer_id, "C1");
        assert_eq!(batch.transactions[1].customer_id, "C2");
    }

    #[test]
    fn rejection_reasons_render_for_reports() {
        assert_eq!(
            RejectionReason::MissingField { field: "date" }.to_string(),
            "missing required field `date`"
        );
        assert_eq!(
            RejectionReason::UnparseableDate {
                raw: "x".to_string()
            }
            .to_string(),
            "unparseable date `x`"
        );
    }
}
