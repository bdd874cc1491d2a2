// Shared fixtures for sales-analytics integration tests
#![allow(dead_code)]

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use sales_analytics::core::calendar::week_of_month;
use sales_analytics::Transaction;

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Builder for test transactions with sensible defaults.
pub struct TxBuilder {
    tx: Transaction,
}

impl TxBuilder {
    pub fn new(customer: &str, value: Decimal) -> Self {
        Self {
            tx: Transaction::new(customer, "Ana", value, ymd(2025, 11, 5)),
        }
    }

    pub fn salesperson(mut self, name: &str) -> Self {
        self.tx.salesperson = name.to_string();
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.tx.date = date;
        self.tx.weekday = date.weekday();
        self.tx.week_of_month = week_of_month(date);
        self
    }

    pub fn product(mut self, product: &str) -> Self {
        self.tx.product = Some(product.to_string());
        self
    }

    pub fn state(mut self, state: &str) -> Self {
        self.tx.state = state.to_string();
        self
    }

    pub fn segment(mut self, segment: &str) -> Self {
        self.tx.segment = segment.to_string();
        self
    }

    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.tx.quantity = Some(quantity);
        self
    }

    pub fn build(self) -> Transaction {
        self.tx
    }
}

/// Two months of sales for three salespeople across two states.
pub fn two_month_fixture() -> Vec<Transaction> {
    use rust_decimal_macros::dec;

    vec![
        TxBuilder::new("C1", dec!(1200)).salesperson("Ana").state("SP").segment("Varejo").product("P1").on(ymd(2025, 11, 3)).build(),
        TxBuilder::new("C2", dec!(800)).salesperson("Bruno").state("RJ").segment("Atacado").product("P2").on(ymd(2025, 11, 4)).build(),
        TxBuilder::new("C3", dec!(450)).salesperson("Ana").state("SP").segment("Varejo").product("P1").on(ymd(2025, 11, 12)).build(),
        TxBuilder::new("C1", dec!(300)).salesperson("Carla").state("SP").segment("Varejo").product("P3").on(ymd(2025, 11, 21)).build(),
        TxBuilder::new("C4", dec!(250)).salesperson("Bruno").state("RJ").segment("Atacado").product("P2").on(ymd(2025, 11, 29)).build(),
        TxBuilder::new("C1", dec!(900)).salesperson("Ana").state("SP").segment("Varejo").product("P1").on(ymd(2025, 10, 6)).build(),
        TxBuilder::new("C2", dec!(600)).salesperson("Bruno").state("RJ").segment("Atacado").product("P2").on(ymd(2025, 10, 15)).build(),
    ]
}
