//! Simulation orchestrator.
//!
//! Validates parameters, prepares the series once, and runs the three
//! strategy evaluators against the identical prepared input. Pure: repeated
//! calls with the same inputs produce bit-identical output, and a failure in
//! any stage means no strategy result is produced at all.

use crate::domain::error::DcasimError;
use crate::domain::params::SimulationParams;
use crate::domain::prepare::prepare_series;
use crate::domain::price::PricePoint;
use crate::domain::strategy::{
    run_dynamic_dca, run_standard_dca, run_value_averaging, StrategyResult,
};

/// Run all three strategies over the supplied price history.
///
/// Results come back in fixed order: standard DCA, dynamic DCA, value
/// averaging. Each evaluator owns its own state; nothing is shared between
/// them but the prepared series.
pub fn run_simulation(
    params: &SimulationParams,
    series: &[PricePoint],
) -> Result<Vec<StrategyResult>, DcasimError> {
    params.validate()?;

    let prepared = prepare_series(params, series)?;

    Ok(vec![
        run_standard_dca(params, &prepared),
        run_dynamic_dca(params, &prepared),
        run_value_averaging(params, &prepared),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::params::Frequency;
    use crate::domain::strategy::StrategyKind;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_series(count: usize) -> Vec<PricePoint> {
        (0..count)
            .map(|i| PricePoint {
                date: date(2024, 1, 1) + chrono::Duration::weeks(i as i64),
                close: 100.0 + (i as f64 % 5.0) * 10.0,
                indicator: Some(30.0 + (i as f64 % 6.0) * 10.0),
            })
            .collect()
    }

    fn sample_params() -> SimulationParams {
        SimulationParams {
            asset: "BTC".into(),
            frequency: Frequency::Weekly,
            base_budget: 500.0,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 12, 31),
            extreme_low_threshold: 30.0,
            budget_extreme_low: 1000.0,
            low_threshold: 40.0,
            budget_low: 750.0,
            high_threshold: 70.0,
            budget_high: 375.0,
            extreme_high_threshold: 80.0,
            budget_extreme_high: 250.0,
            period_growth: 500.0,
            max_buy_cap: 1500.0,
            max_sell_cap: 500.0,
        }
    }

    #[test]
    fn returns_three_results_in_fixed_order() {
        let results = run_simulation(&sample_params(), &make_series(10)).unwrap();
        let names: Vec<StrategyKind> = results.iter().map(|r| r.strategy_name).collect();
        assert_eq!(
            names,
            vec![
                StrategyKind::StandardDca,
                StrategyKind::DynamicDca,
                StrategyKind::ValueAveraging,
            ]
        );
    }

    #[test]
    fn all_strategies_consume_the_same_prepared_series() {
        let results = run_simulation(&sample_params(), &make_series(10)).unwrap();
        let dates: Vec<Vec<NaiveDate>> = results
            .iter()
            .map(|r| r.time_series.iter().map(|p| p.date).collect())
            .collect();
        assert_eq!(dates[0], dates[1]);
        assert_eq!(dates[1], dates[2]);
    }

    #[test]
    fn deterministic_across_invocations() {
        let params = sample_params();
        let series = make_series(30);
        let a = run_simulation(&params, &series).unwrap();
        let b = run_simulation(&params, &series).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_parameters_fail_before_touching_the_series() {
        let mut params = sample_params();
        params.start_date = date(2025, 1, 1);
        params.end_date = date(2024, 1, 1);

        // An empty series would otherwise trip InsufficientData; parameter
        // validation must win.
        let err = run_simulation(&params, &[]).unwrap_err();
        assert!(matches!(err, DcasimError::InvalidParameters { .. }));
    }

    #[test]
    fn single_surviving_point_is_insufficient() {
        let series = make_series(10);
        let mut params = sample_params();
        params.start_date = series[4].date;
        params.end_date = series[4].date + chrono::Duration::days(1);

        let err = run_simulation(&params, &series).unwrap_err();
        assert!(matches!(err, DcasimError::InsufficientData { points: 1, .. }));
    }

    #[test]
    fn evaluator_state_does_not_leak_across_strategies() {
        // Mid-band indicator keeps dynamic DCA at the base budget, so the
        // first two walks are identical while value averaging reacts to the
        // moving price. Any cross-contamination of running totals would
        // break the equality.
        let series: Vec<PricePoint> = (0..6)
            .map(|i| PricePoint {
                date: date(2024, 1, 1) + chrono::Duration::weeks(i),
                close: 100.0 + i as f64 * 15.0,
                indicator: Some(55.0),
            })
            .collect();
        let results = run_simulation(&sample_params(), &series).unwrap();
        assert_eq!(results[0].time_series, results[1].time_series);
        assert_ne!(results[0].time_series, results[2].time_series);
    }
}
