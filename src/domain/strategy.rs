//! Strategy evaluators: the three stateful walks over a prepared series.
//!
//! All three share one loop skeleton: walk the series in order, compute a
//! signed per-period investment, update running totals, emit a row. They
//! differ only in how the period investment is chosen.

use crate::domain::metrics::Metrics;
use crate::domain::params::SimulationParams;
use crate::domain::price::PricePoint;
use serde::Serialize;

/// Closed set of simulated strategies. The serialized names are the wire
/// contract with the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrategyKind {
    #[serde(rename = "standardDca")]
    StandardDca,
    #[serde(rename = "dynamicDca")]
    DynamicDca,
    #[serde(rename = "valueAveraging")]
    ValueAveraging,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::StandardDca => "standardDca",
            StrategyKind::DynamicDca => "dynamicDca",
            StrategyKind::ValueAveraging => "valueAveraging",
        }
    }

    /// Human-readable label for console output.
    pub fn label(&self) -> &'static str {
        match self {
            StrategyKind::StandardDca => "Standard DCA",
            StrategyKind::DynamicDca => "Dynamic DCA",
            StrategyKind::ValueAveraging => "Value Averaging",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of a strategy's time series. Totals are post-period;
/// `period_investment` is signed (positive = buy, negative = sell).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    pub date: chrono::NaiveDate,
    pub price: f64,
    pub asset_accumulated: f64,
    pub portfolio_value: f64,
    pub average_cost_basis: f64,
    pub usd_invested: f64,
    pub period_investment: f64,
}

/// Result of one strategy over one prepared series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyResult {
    pub strategy_name: StrategyKind,
    pub time_series: Vec<TimeSeriesPoint>,
    pub metrics: Metrics,
}

/// Running totals for one evaluator. Exclusively owned by a single
/// evaluator's loop; never shared across strategies or periods.
#[derive(Debug, Default)]
struct SimulationState {
    asset_accumulated: f64,
    usd_invested: f64,
}

impl SimulationState {
    /// Apply a signed investment at the given price and emit the row for
    /// this period.
    fn apply(&mut self, point: &PricePoint, investment: f64) -> TimeSeriesPoint {
        self.usd_invested += investment;
        self.asset_accumulated += investment / point.close;

        // Selling can never drive holdings negative. The matching
        // usd_invested reduction is intentionally NOT applied; see the
        // oversell note in DESIGN.md.
        if self.asset_accumulated < 0.0 {
            self.asset_accumulated = 0.0;
        }

        let portfolio_value = self.asset_accumulated * point.close;
        let average_cost_basis = if self.usd_invested > 0.0 && self.asset_accumulated > 0.0 {
            self.usd_invested / self.asset_accumulated
        } else {
            0.0
        };

        TimeSeriesPoint {
            date: point.date,
            price: point.close,
            asset_accumulated: self.asset_accumulated,
            portfolio_value,
            average_cost_basis,
            usd_invested: self.usd_invested,
            period_investment: investment,
        }
    }

    fn portfolio_value_at(&self, price: f64) -> f64 {
        self.asset_accumulated * price
    }
}

/// Fixed-amount DCA: invest `base_budget` every period, unconditionally.
pub fn run_standard_dca(params: &SimulationParams, series: &[PricePoint]) -> StrategyResult {
    let mut state = SimulationState::default();
    let mut time_series = Vec::with_capacity(series.len());

    for point in series {
        time_series.push(state.apply(point, params.base_budget));
    }

    finish(StrategyKind::StandardDca, time_series, params)
}

/// Indicator-tiered DCA: pick the period budget from the indicator tier.
pub fn run_dynamic_dca(params: &SimulationParams, series: &[PricePoint]) -> StrategyResult {
    let mut state = SimulationState::default();
    let mut time_series = Vec::with_capacity(series.len());

    for point in series {
        let investment = tiered_investment(params, point.indicator);
        time_series.push(state.apply(point, investment));
    }

    finish(StrategyKind::DynamicDca, time_series, params)
}

/// Tier selection, first match wins. The extreme checks deliberately precede
/// the plain ones so that an extreme reading is never absorbed by the wider
/// band. Missing or non-finite indicator falls back to the base budget.
fn tiered_investment(params: &SimulationParams, indicator: Option<f64>) -> f64 {
    let reading = match indicator {
        Some(r) if r.is_finite() => r,
        _ => return params.base_budget,
    };

    if reading <= params.extreme_low_threshold {
        params.budget_extreme_low
    } else if reading <= params.low_threshold {
        params.budget_low
    } else if reading >= params.extreme_high_threshold {
        params.budget_extreme_high
    } else if reading >= params.high_threshold {
        params.budget_high
    } else {
        params.base_budget
    }
}

/// Value averaging: buy or sell each period to steer portfolio value toward
/// a target that grows by `period_growth` per period. Buys are capped at
/// `max_buy_cap`, sells at `max_sell_cap` in magnitude.
pub fn run_value_averaging(params: &SimulationParams, series: &[PricePoint]) -> StrategyResult {
    let mut state = SimulationState::default();
    let mut target_value = 0.0;
    let mut time_series = Vec::with_capacity(series.len());

    for point in series {
        target_value += params.period_growth;
        let current_value = state.portfolio_value_at(point.close);

        let mut investment = target_value - current_value;
        if investment > 0.0 {
            investment = investment.min(params.max_buy_cap);
        } else {
            investment = investment.max(-params.max_sell_cap);
        }

        time_series.push(state.apply(point, investment));
    }

    finish(StrategyKind::ValueAveraging, time_series, params)
}

fn finish(
    kind: StrategyKind,
    time_series: Vec<TimeSeriesPoint>,
    params: &SimulationParams,
) -> StrategyResult {
    let metrics = Metrics::compute(&time_series, params.frequency);
    StrategyResult {
        strategy_name: kind,
        time_series,
        metrics,
    }
}
