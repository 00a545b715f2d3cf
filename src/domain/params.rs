//! Simulation parameters and validation.
//!
//! Every numeric field is checked before any computation runs; validation
//! failures surface as `InvalidParameters` naming the offending field.

use crate::domain::error::DcasimError;
use chrono::NaiveDate;

/// Investment cadence. Selects both the resampling stride applied to the
/// source series and the annualization factor used by the Sharpe ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    /// Periods per year used to annualize the Sharpe ratio.
    pub fn periods_per_year(&self) -> f64 {
        match self {
            Frequency::Daily => 365.0,
            Frequency::Weekly => 52.0,
            Frequency::Monthly => 12.0,
        }
    }

    /// Index stride over the weekly-granularity source series.
    ///
    /// Monthly keeps every 4th point starting at index 0. This is a
    /// four-week approximation, not calendar-month-aware, and historical
    /// results depend on this exact sampling.
    pub fn sample_stride(&self) -> usize {
        match self {
            Frequency::Daily | Frequency::Weekly => 1,
            Frequency::Monthly => 4,
        }
    }

    pub fn parse(s: &str) -> Option<Frequency> {
        match s.to_lowercase().as_str() {
            "daily" => Some(Frequency::Daily),
            "weekly" => Some(Frequency::Weekly),
            "monthly" => Some(Frequency::Monthly),
            _ => None,
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        };
        write!(f, "{s}")
    }
}

/// Full parameter set for one simulation run.
///
/// The asset id is opaque to the engine; it only selects which price series
/// the data port supplies.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    pub asset: String,
    pub frequency: Frequency,
    pub base_budget: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    // Indicator-tiered DCA
    pub extreme_low_threshold: f64,
    pub budget_extreme_low: f64,
    pub low_threshold: f64,
    pub budget_low: f64,
    pub high_threshold: f64,
    pub budget_high: f64,
    pub extreme_high_threshold: f64,
    pub budget_extreme_high: f64,

    // Value averaging
    pub period_growth: f64,
    pub max_buy_cap: f64,
    pub max_sell_cap: f64,
}

impl SimulationParams {
    pub fn validate(&self) -> Result<(), DcasimError> {
        validate_positive("base_budget", self.base_budget)?;
        validate_dates(self.start_date, self.end_date)?;
        validate_thresholds(self)?;
        validate_non_negative("budget_extreme_low", self.budget_extreme_low)?;
        validate_non_negative("budget_low", self.budget_low)?;
        validate_non_negative("budget_high", self.budget_high)?;
        validate_non_negative("budget_extreme_high", self.budget_extreme_high)?;
        validate_non_negative("period_growth", self.period_growth)?;
        validate_non_negative("max_buy_cap", self.max_buy_cap)?;
        validate_non_negative("max_sell_cap", self.max_sell_cap)?;
        Ok(())
    }
}

fn validate_positive(field: &str, value: f64) -> Result<(), DcasimError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DcasimError::InvalidParameters {
            field: field.to_string(),
            reason: format!("must be a positive finite number, got {value}"),
        });
    }
    Ok(())
}

fn validate_non_negative(field: &str, value: f64) -> Result<(), DcasimError> {
    if !value.is_finite() || value < 0.0 {
        return Err(DcasimError::InvalidParameters {
            field: field.to_string(),
            reason: format!("must be a non-negative finite number, got {value}"),
        });
    }
    Ok(())
}

fn validate_dates(start: NaiveDate, end: NaiveDate) -> Result<(), DcasimError> {
    if start >= end {
        return Err(DcasimError::InvalidParameters {
            field: "start_date".to_string(),
            reason: "start_date must be before end_date".to_string(),
        });
    }
    Ok(())
}

fn validate_thresholds(params: &SimulationParams) -> Result<(), DcasimError> {
    let thresholds = [
        ("extreme_low_threshold", params.extreme_low_threshold),
        ("low_threshold", params.low_threshold),
        ("high_threshold", params.high_threshold),
        ("extreme_high_threshold", params.extreme_high_threshold),
    ];

    for (field, value) in thresholds {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(DcasimError::InvalidParameters {
                field: field.to_string(),
                reason: format!("must be in [0, 100], got {value}"),
            });
        }
    }

    for window in thresholds.windows(2) {
        let (lo_field, lo) = window[0];
        let (hi_field, hi) = window[1];
        if lo >= hi {
            return Err(DcasimError::InvalidParameters {
                field: hi_field.to_string(),
                reason: format!("{hi_field} ({hi}) must be greater than {lo_field} ({lo})"),
            });
        }
    }

    Ok(())
}
