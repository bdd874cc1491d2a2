//! Sales analytics engine.
//!
//! Turns raw sales records into dashboard data: period-over-period KPIs,
//! ABC/Pareto tiers, top-N rankings and customer positivation. All
//! computation is synchronous and pure over in-memory slices; the only I/O
//! is the optional configuration loader.
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use sales_analytics::{build_dashboard, DashboardRequest, PeriodSelector, Transaction};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2025, 11, d).unwrap();
//! let sales = vec![
//!     Transaction::new("C1", "Ana", dec!(700), day(3)),
//!     Transaction::new("C2", "Bruno", dec!(300), day(12)),
//! ];
//! let request = DashboardRequest::default()
//!     .with_period(PeriodSelector::Month { year: 2025, month: 11 });
//!
//! let report = build_dashboard(&sales, &request, day(20));
//! assert_eq!(report.snapshot.total_value.current, dec!(1000));
//! assert_eq!(report.top_customers[0].key, "C1");
//! ```

pub mod classification;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod filter;
pub mod metrics;
pub mod normalize;
pub mod period;
pub mod ranking;

// Re-export commonly used types
pub use crate::core::{
    key_fn, GroupKey, GroupTotal, KeyExtractor, Transaction, UNCLASSIFIED,
};

pub use crate::classification::{
    classify_abc, AbcThresholds, ClassifiedMember, Tier, TierBucket, TierClassification,
};
pub use crate::config::{get_config, load_config, AnalyticsConfig};
pub use crate::engine::{build_dashboard, DashboardReport, DashboardRequest};
pub use crate::errors::{AnalyticsError, Result};
pub use crate::filter::{
    apply_filters, filter_window, ActorScope, Dimension, FilterSet, FilterStatistics, Filtered,
};
pub use crate::metrics::{
    aggregate_window, compare_windows, percentage_delta, KpiComparison, MetricsSnapshot,
};
pub use crate::normalize::{
    normalize_batch, normalize_sale, CustomerIndex, CustomerLookup, CustomerRecord,
    NormalizedBatch, RawSale, RejectedRecord, RejectionReason,
};
pub use crate::period::{
    resolve_period, resolve_selector, DateRange, PeriodSelector, PeriodWindow, Window,
};
pub use crate::ranking::{calculate_positivation, top_n, Baseline, Positivation, RankingEntry};
