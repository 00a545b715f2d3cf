//! Historical price observation.

use chrono::NaiveDate;
use serde::Serialize;

/// One observation in a date-ascending price series.
///
/// The indicator is a bounded oscillator reading in `[0, 100]` (RSI in the
/// shipped data set). `None` means the supplier had no reading for that date;
/// evaluators must treat missing and present as distinct.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
    pub indicator: Option<f64>,
}

impl PricePoint {
    /// True when the close is a usable price: finite and strictly positive.
    pub fn has_valid_close(&self) -> bool {
        self.close.is_finite() && self.close > 0.0
    }
}
