//! Dashboard pipeline.
//!
//! [`build_dashboard`] runs every stage over one in-memory collection:
//! period resolution, filtering of both windows, KPI comparison, ABC tiers,
//! rankings, positivation and breakdowns. Each call recomputes everything
//! from its inputs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, info, info_span, warn};

use crate::classification::{classify_abc, AbcThresholds, TierClassification};
use crate::config::AnalyticsConfig;
use crate::core::{GroupKey, Transaction};
use crate::filter::{filter_window, ActorScope, FilterSet, FilterStatistics};
use crate::metrics::{
    aggregate_window, breakdown_by, week_of_month_distribution, weekday_distribution,
    GroupSummary, MetricsSnapshot, WeekOfMonthTotal, WeekdayTotal,
};
use crate::period::{resolve_period, PeriodSelector, PeriodWindow};
use crate::ranking::{calculate_positivation, top_n, Positivation, RankingEntry};

/// Everything the host chooses for one dashboard computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub period: PeriodSelector,
    #[serde(default)]
    pub filters: FilterSet,
    #[serde(default)]
    pub scope: ActorScope,
    #[serde(default)]
    pub goal: Decimal,
    #[serde(default = "crate::config::default_top_n")]
    pub top_n: usize,
    #[serde(default)]
    pub total_customers: Option<usize>,
    #[serde(default)]
    pub thresholds: AbcThresholds,
}

impl DashboardRequest {
    /// Seed a request from configuration: default period, goal, ranking
    /// size, customer total and tier boundaries. Filters and scope start
    /// unrestricted.
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        let thresholds = config.abc_thresholds().unwrap_or_else(|| {
            warn!(
                a_threshold = config.classification.a_threshold,
                b_threshold = config.classification.b_threshold,
                "Inconsistent ABC thresholds in config, using 80/95"
            );
            AbcThresholds::default()
        });

        Self {
            period: config.default_period(),
            filters: FilterSet::default(),
            scope: ActorScope::default(),
            goal: config.metrics.monthly_goal,
            top_n: config.ranking.default_top_n,
            total_customers: config.positivation.total_customers,
            thresholds,
        }
    }

    pub fn with_period(mut self, period: PeriodSelector) -> Self {
        self.period = period;
        self
    }

    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_scope(mut self, scope: ActorScope) -> Self {
        self.scope = scope;
        self
    }
}

impl Default for DashboardRequest {
    fn default() -> Self {
        Self::from_config(&AnalyticsConfig::default())
    }
}

/// Combined dashboard output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub period: PeriodSelector,
    pub window: PeriodWindow,
    pub snapshot: MetricsSnapshot,
    pub customer_tiers: TierClassification,
    pub product_tiers: TierClassification,
    pub top_customers: Vec<RankingEntry>,
    pub top_salespeople: Vec<RankingEntry>,
    pub top_products: Vec<RankingEntry>,
    pub positivation: Positivation,
    pub current_filter: FilterStatistics,
    pub previous_filter: FilterStatistics,
    pub by_state: Vec<GroupSummary>,
    pub by_segment: Vec<GroupSummary>,
    pub by_nature: Vec<GroupSummary>,
    pub by_weekday: Vec<WeekdayTotal>,
    pub by_week_of_month: Vec<WeekOfMonthTotal>,
}

/// Run the full pipeline for `request` against `transactions`.
///
/// `today` anchors relative and current-month periods.
pub fn build_dashboard(
    transactions: &[Transaction],
    request: &DashboardRequest,
    today: NaiveDate,
) -> DashboardReport {
    let span = info_span!(
        "dashboard",
        transactions = transactions.len(),
        period = %request.period,
        top_n = request.top_n,
    );
    let _guard = span.enter();

    let window = resolve_period(&request.period, today);

    let (current, previous) = {
        let _span = debug_span!("filtering").entered();
        let current = filter_window(transactions, &request.filters, &request.scope, &window.current);
        let previous =
            filter_window(transactions, &request.filters, &request.scope, &window.previous);
        debug!(
            current = current.len(),
            previous = previous.len(),
            filtered_by_scope = current.stats.filtered_by_scope,
            filtered_by_window = current.stats.filtered_by_window,
            "Filtered windows"
        );
        (current, previous)
    };

    let snapshot = {
        let _span = debug_span!("metrics").entered();
        let current_totals = aggregate_window(current.iter());
        let previous_totals = aggregate_window(previous.iter());
        MetricsSnapshot::from_totals(&current_totals, &previous_totals, request.goal)
    };

    let (customer_tiers, product_tiers) = {
        let _span = debug_span!("classification").entered();
        let customers = classify_abc(current.iter(), &GroupKey::Customer, &request.thresholds);
        let products = classify_abc(current.iter(), &GroupKey::Product, &request.thresholds);
        debug!(
            customers = customers.total_members,
            products = products.total_members,
            "Classified customers and products"
        );
        (customers, products)
    };

    let (top_customers, top_salespeople, top_products) = {
        let _span = debug_span!("ranking").entered();
        (
            top_n(current.iter(), &GroupKey::Customer, request.top_n),
            top_n(current.iter(), &GroupKey::Salesperson, request.top_n),
            top_n(current.iter(), &GroupKey::Product, request.top_n),
        )
    };

    let salesperson = match &request.scope {
        ActorScope::Salesperson { name } => Some(name.as_str()),
        ActorScope::Unrestricted => None,
    };
    let positivation = calculate_positivation(current.iter(), salesperson, request.total_customers);

    let report = DashboardReport {
        period: request.period.clone(),
        window,
        snapshot,
        customer_tiers,
        product_tiers,
        top_customers,
        top_salespeople,
        top_products,
        positivation,
        by_state: breakdown_by(current.iter(), &GroupKey::State),
        by_segment: breakdown_by(current.iter(), &GroupKey::Segment),
        by_nature: breakdown_by(current.iter(), &GroupKey::Nature),
        by_weekday: weekday_distribution(current.iter()),
        by_week_of_month: week_of_month_distribution(current.iter()),
        current_filter: current.stats,
        previous_filter: previous.stats,
    };

    info!(
        current = report.current_filter.accepted,
        previous = report.previous_filter.accepted,
        total_value = %report.snapshot.total_value.current,
        "Dashboard computed"
    );

    report
}
