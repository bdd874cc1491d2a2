//! Core domain types: the normalized transaction, calendar helpers,
//! grouping keys and value-per-key grouping.

pub mod calendar;
pub mod group_key;
pub mod grouping;
pub mod types;

pub use group_key::{key_fn, FnKey, GroupKey, KeyExtractor};
pub use grouping::{group_totals, ranked_group_totals, GroupTotal};
pub use types::{Transaction, UNCLASSIFIED};
