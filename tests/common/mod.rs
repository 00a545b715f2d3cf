#![allow(dead_code)]

use chrono::NaiveDate;
use dcasim::domain::error::DcasimError;
use dcasim::domain::params::{Frequency, SimulationParams};
pub use dcasim::domain::price::PricePoint;
use dcasim::ports::data_port::DataPort;
use std::collections::HashMap;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<PricePoint>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_series(mut self, asset: &str, series: Vec<PricePoint>) -> Self {
        self.data.insert(asset.to_string(), series);
        self
    }

    pub fn with_error(mut self, asset: &str, reason: &str) -> Self {
        self.errors.insert(asset.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_price_history(&self, asset: &str) -> Result<Vec<PricePoint>, DcasimError> {
        if let Some(reason) = self.errors.get(asset) {
            return Err(DcasimError::Data {
                reason: reason.clone(),
            });
        }
        Ok(self.data.get(asset).cloned().unwrap_or_default())
    }

    fn list_assets(&self) -> Result<Vec<String>, DcasimError> {
        Ok(self.data.keys().cloned().collect())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_point(d: &str, close: f64, indicator: Option<f64>) -> PricePoint {
    PricePoint {
        date: NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap(),
        close,
        indicator,
    }
}

/// Weekly series starting 2024-01-01 with the given closes, no indicator.
pub fn make_series(closes: &[f64]) -> Vec<PricePoint> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint {
            date: date(2024, 1, 1) + chrono::Duration::weeks(i as i64),
            close,
            indicator: None,
        })
        .collect()
}

pub fn sample_params() -> SimulationParams {
    SimulationParams {
        asset: "BTC".into(),
        frequency: Frequency::Weekly,
        base_budget: 100.0,
        start_date: date(2024, 1, 1),
        end_date: date(2025, 12, 31),
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
