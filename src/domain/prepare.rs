//! Price series preparation: date filtering and frequency resampling.

use crate::domain::error::DcasimError;
use crate::domain::params::SimulationParams;
use crate::domain::price::PricePoint;

/// Minimum prepared-series length. Drawdown and return series need at least
/// two observations.
pub const MIN_PRICE_POINTS: usize = 2;

/// Produce the exact sub-sequence the strategy evaluators consume.
///
/// Keeps points with `start_date <= date <= end_date` (inclusive, calendar
/// dates), drops points whose close fails the positivity re-check, then
/// resamples by the frequency's index stride. Pure transformation; the input
/// is expected date-ascending and comes back in the same order.
pub fn prepare_series(
    params: &SimulationParams,
    series: &[PricePoint],
) -> Result<Vec<PricePoint>, DcasimError> {
    let prepared: Vec<PricePoint> = series
        .iter()
        .filter(|p| p.date >= params.start_date && p.date <= params.end_date)
        .filter(|p| p.has_valid_close())
        .step_by(params.frequency.sample_stride())
        .cloned()
        .collect();

    if prepared.len() < MIN_PRICE_POINTS {
        return Err(DcasimError::InsufficientData {
            points: prepared.len(),
            minimum: MIN_PRICE_POINTS,
        });
    }

    Ok(prepared)
}
