use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calendar::week_of_month;

/// Sentinel for a dimension whose value could not be resolved.
///
/// Customers missing from the lookup (or carrying a blank attribute) are
/// tagged with this value instead of propagating an absent value downstream.
pub const UNCLASSIFIED: &str = "unclassified";

/// A normalized commercial transaction, the atomic unit of every aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub customer_id: String,
    pub customer_name: String,
    pub salesperson: String,
    /// Non-negative amount, two decimal places, single currency.
    pub value: Decimal,
    pub quantity: Option<Decimal>,
    pub product: Option<String>,
    /// Operation nature (sale, bonus, return...).
    pub nature: String,
    pub segment: String,
    pub status: String,
    pub state: String,
    pub date: NaiveDate,
    pub weekday: Weekday,
    /// `ceil(day / 7)`, always in `1..=5`.
    pub week_of_month: u32,
}

impl Transaction {
    /// Create a transaction with every category dimension unclassified.
    ///
    /// Weekday and week-of-month are derived from `date`.
    pub fn new(
        customer_id: impl Into<String>,
        salesperson: impl Into<String>,
        value: Decimal,
        date: NaiveDate,
    ) -> Self {
        let customer_id = customer_id.into();
        Self {
            customer_name: customer_id.clone(),
            customer_id,
            salesperson: salesperson.into(),
            value: value.round_dp(2),
            quantity: None,
            product: None,
            nature: UNCLASSIFIED.to_string(),
            segment: UNCLASSIFIED.to_string(),
            status: UNCLASSIFIED.to_string(),
            state: UNCLASSIFIED.to_string(),
            date,
            weekday: date.weekday(),
            week_of_month: week_of_month(date),
        }
    }

    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = name.into();
        self
    }

    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    pub fn with_nature(mut self, nature: impl Into<String>) -> Self {
        self.nature = nature.into();
        self
    }

    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = segment.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Units sold, counting a missing quantity as zero.
    pub fn units(&self) -> Decimal {
        self.quantity.unwrap_or(Decimal::ZERO)
    }
}
