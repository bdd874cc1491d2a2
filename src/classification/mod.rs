//! ABC/Pareto classification.
//!
//! Groups are ranked by contributed value and walked in order while a
//! running total accumulates. A group's tier is decided by the cumulative
//! percentage *after* its own value is added, so the group that crosses a
//! threshold lands in the tier its cumulative value falls into.
//!
//! ```
//! use sales_analytics::classification::{classify_abc, AbcThresholds, Tier};
//! use sales_analytics::core::{GroupKey, Transaction};
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let day = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
//! let data = vec![
//!     Transaction::new("A", "Ana", dec!(100), day),
//!     Transaction::new("B", "Ana", dec!(300), day),
//!     Transaction::new("C", "Ana", dec!(600), day),
//! ];
//!
//! let abc = classify_abc(&data, &GroupKey::Customer, &AbcThresholds::default());
//! assert_eq!(abc.tier_of("C"), Some(Tier::A));
//! assert_eq!(abc.tier_of("B"), Some(Tier::B));
//! assert_eq!(abc.tier_of("A"), Some(Tier::C));
//! ```

mod thresholds;

pub use thresholds::AbcThresholds;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::core::{ranked_group_totals, KeyExtractor, Transaction};
use crate::metrics::comparator::as_f64;

/// Pareto tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    A,
    B,
    C,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::A, Tier::B, Tier::C];
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
        };
        f.write_str(label)
    }
}

/// A ranked group with its Pareto position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedMember {
    /// 1-based position in the value ranking.
    pub rank: usize,
    pub key: String,
    pub total_value: Decimal,
    pub occurrences: usize,
    pub value_percentage: f64,
    pub cumulative_percentage: f64,
    pub tier: Tier,
}

/// Aggregate of one tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierBucket {
    pub tier: Tier,
    pub member_count: usize,
    pub total_value: Decimal,
    pub member_percentage: f64,
    pub value_percentage: f64,
}

/// Full classification result.
///
/// Empty (no buckets, no members) when the grand total is zero. Otherwise
/// `tiers` holds A, B and C in that order, possibly with empty buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TierClassification {
    pub grand_total: Decimal,
    pub total_members: usize,
    pub tiers: Vec<TierBucket>,
    pub members: Vec<ClassifiedMember>,
}

impl TierClassification {
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn bucket(&self, tier: Tier) -> Option<&TierBucket> {
        self.tiers.iter().find(|bucket| bucket.tier == tier)
    }

    pub fn tier_of(&self, key: &str) -> Option<Tier> {
        self.members
            .iter()
            .find(|member| member.key == key)
            .map(|member| member.tier)
    }

    pub fn members_in(&self, tier: Tier) -> impl Iterator<Item = &ClassifiedMember> {
        self.members.iter().filter(move |member| member.tier == tier)
    }
}

/// Tier for a cumulative percentage; upper bounds are inclusive.
pub fn classify_tier(cumulative_percentage: f64, thresholds: &AbcThresholds) -> Tier {
    if cumulative_percentage <= thresholds.a_upper() {
        Tier::A
    } else if cumulative_percentage <= thresholds.b_upper() {
        Tier::B
    } else {
        Tier::C
    }
}

/// Classify groups of `transactions` under `key` into A/B/C tiers.
pub fn classify_abc<'a, K>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    key: &K,
    thresholds: &AbcThresholds,
) -> TierClassification
where
    K: KeyExtractor + ?Sized,
{
    let groups = ranked_group_totals(transactions, key);
    let grand_total: Decimal = groups.iter().map(|g| g.total_value).sum();

    if grand_total <= Decimal::ZERO {
        debug!(groups = groups.len(), "Zero grand total, classification is empty");
        return TierClassification::default();
    }

    let mut running = Decimal::ZERO;
    let members: Vec<ClassifiedMember> = groups
        .into_iter()
        .enumerate()
        .map(|(index, group)| {
            running += group.total_value;
            let cumulative_percentage = percentage_of(running, grand_total);
            ClassifiedMember {
                rank: index + 1,
                value_percentage: percentage_of(group.total_value, grand_total),
                tier: classify_tier(cumulative_percentage, thresholds),
                cumulative_percentage,
                key: group.key,
                total_value: group.total_value,
                occurrences: group.occurrences,
            }
        })
        .collect();

    let total_members = members.len();
    let tiers = Tier::ALL
        .iter()
        .map(|&tier| summarize_tier(tier, &members, total_members, grand_total))
        .collect();

    TierClassification {
        grand_total,
        total_members,
        tiers,
        members,
    }
}

fn summarize_tier(
    tier: Tier,
    members: &[ClassifiedMember],
    total_members: usize,
    grand_total: Decimal,
) -> TierBucket {
    let (member_count, total_value) = members
        .iter()
        .filter(|member| member.tier == tier)
        .fold((0usize, Decimal::ZERO), |(count, value), member| {
            (count + 1, value + member.total_value)
        });

    TierBucket {
        tier,
        member_count,
        total_value,
        member_percentage: member_count as f64 / total_members as f64 * 100.0,
        value_percentage: percentage_of(total_value, grand_total),
    }
}

/// `part * 100 / whole` computed in decimal, so exact boundaries like
/// 80% stay exact.
fn percentage_of(part: Decimal, whole: Decimal) -> f64 {
    part.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(whole))
        .map(as_f64)
        .unwrap_or(0.0)
}
