//! CSV price-history adapter.
//!
//! Reads `<ASSET>.csv` files with columns `date,close,rsi` as produced by
//! the collector. The rsi column may be blank; blank, non-numeric, or
//! out-of-range readings are treated as missing rather than fatal, matching
//! the supplier contract that indicator noise is ignorable at the boundary.

use crate::domain::error::DcasimError;
use crate::domain::price::PricePoint;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, asset: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", asset.to_uppercase()))
    }
}

fn parse_indicator(raw: Option<&str>) -> Option<f64> {
    let value: f64 = raw?.trim().parse().ok()?;
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Some(value)
    } else {
        None
    }
}

impl DataPort for CsvAdapter {
    fn fetch_price_history(&self, asset: &str) -> Result<Vec<PricePoint>, DcasimError> {
        let path = self.csv_path(asset);
        let content = fs::read_to_string(&path).map_err(|e| DcasimError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut points = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| DcasimError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| DcasimError::Data {
                reason: "missing date column".into(),
            })?;
            let date =
                NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| DcasimError::Data {
                    reason: format!("invalid date {date_str}: {e}"),
                })?;

            let close: f64 = record
                .get(1)
                .ok_or_else(|| DcasimError::Data {
                    reason: "missing close column".into(),
                })?
                .parse()
                .map_err(|e| DcasimError::Data {
                    reason: format!("invalid close value: {}", e),
                })?;

            if !close.is_finite() || close <= 0.0 {
                return Err(DcasimError::Data {
                    reason: format!("non-positive close {close} on {date}"),
                });
            }

            points.push(PricePoint {
                date,
                close,
                indicator: parse_indicator(record.get(2)),
            });
        }

        points.sort_by_key(|p| p.date);
        Ok(points)
    }

    fn list_assets(&self) -> Result<Vec<String>, DcasimError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| DcasimError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut assets = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DcasimError::Data {
                reason: format!("directory entry error: {}", e),
            })?;
            let name = entry.file_name();
            let name_str = name.to_string_lossy();
            if let Some(stem) = name_str.strip_suffix(".csv") {
                assets.push(stem.to_string());
            }
        }

        assets.sort();
        Ok(assets)
    }
}
