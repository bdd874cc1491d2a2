use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Customer master data used to enrich sale records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub segment: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Lookup of customer records by identifier.
pub trait CustomerLookup {
    fn find(&self, customer_id: &str) -> Option<&CustomerRecord>;
}

impl CustomerLookup for HashMap<String, CustomerRecord> {
    fn find(&self, customer_id: &str) -> Option<&CustomerRecord> {
        self.get(customer_id)
    }
}

/// Hash index over customer records.
///
/// On duplicate identifiers the last record wins, matching how the customer
/// list is refreshed upstream.
#[derive(Debug, Clone, Default)]
pub struct CustomerIndex {
    by_id: HashMap<String, CustomerRecord>,
}

impl CustomerIndex {
    pub fn from_records(records: impl IntoIterator<Item = CustomerRecord>) -> Self {
        let by_id = records
            .into_iter()
            .map(|record| (record.id.trim().to_string(), record))
            .collect();
        Self { by_id }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl CustomerLookup for CustomerIndex {
    fn find(&self, customer_id: &str) -> Option<&CustomerRecord> {
        self.by_id.get(customer_id)
    }
}
