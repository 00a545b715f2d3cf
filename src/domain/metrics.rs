//! Summary statistics over a completed strategy time series.

use crate::domain::params::Frequency;
use crate::domain::strategy::TimeSeriesPoint;
use serde::Serialize;

/// Summary metrics for one strategy run. Drawdown and ROI are percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_usd_invested: f64,
    pub total_asset_accumulated: f64,
    pub final_portfolio_value: f64,
    pub average_cost_basis: f64,
    pub roi_percentage: f64,
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
}

impl Metrics {
    pub fn zero() -> Self {
        Metrics {
            total_usd_invested: 0.0,
            total_asset_accumulated: 0.0,
            final_portfolio_value: 0.0,
            average_cost_basis: 0.0,
            roi_percentage: 0.0,
            max_drawdown: 0.0,
            sharpe_ratio: 0.0,
        }
    }

    /// Reduce a date-ordered time series to summary metrics. Series shorter
    /// than two rows produce the all-zero value.
    pub fn compute(time_series: &[TimeSeriesPoint], frequency: Frequency) -> Self {
        if time_series.len() < 2 {
            return Metrics::zero();
        }

        let last = &time_series[time_series.len() - 1];
        let total_usd_invested = last.usd_invested;
        let final_portfolio_value = last.portfolio_value;

        let roi_percentage = if total_usd_invested > 0.0 {
            (final_portfolio_value - total_usd_invested) / total_usd_invested * 100.0
        } else {
            0.0
        };

        Metrics {
            total_usd_invested,
            total_asset_accumulated: last.asset_accumulated,
            final_portfolio_value,
            average_cost_basis: last.average_cost_basis,
            roi_percentage,
            max_drawdown: compute_max_drawdown(time_series) * 100.0,
            sharpe_ratio: compute_sharpe(time_series, frequency),
        }
    }
}

/// Running-peak drawdown as a ratio in [0, 1].
fn compute_max_drawdown(time_series: &[TimeSeriesPoint]) -> f64 {
    let mut peak = 0.0_f64;
    let mut max_dd = 0.0_f64;

    for point in time_series {
        if point.portfolio_value > peak {
            peak = point.portfolio_value;
        }
        let dd = if peak > 0.0 {
            (peak - point.portfolio_value) / peak
        } else {
            0.0
        };
        if dd > max_dd {
            max_dd = dd;
        }
    }

    max_dd
}

/// Annualized Sharpe ratio from per-period portfolio returns, risk-free rate
/// assumed 0. Uses the sample standard deviation (divisor n-1). Fewer than
/// two returns, or zero volatility, yields 0.
fn compute_sharpe(time_series: &[TimeSeriesPoint], frequency: Frequency) -> f64 {
    let returns: Vec<f64> = time_series
        .windows(2)
        .map(|w| {
            let prev = w[0].portfolio_value;
            if prev > 0.0 {
                (w[1].portfolio_value - prev) / prev
            } else {
                0.0
            }
        })
        .collect();

    if returns.len() < 2 {
        return 0.0;
    }

    let n = returns.len() as f64;
    let mean: f64 = returns.iter().sum::<f64>() / n;
    let variance: f64 = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let stddev = variance.sqrt();

    if stddev > 0.0 {
        (mean / stddev) * frequency.periods_per_year().sqrt()
    } else {
        0.0
    }
}
