//! CSV report adapter.
//!
//! Writes one time-series file per strategy next to the requested output
//! path, for charting in external tools. `results.csv` becomes
//! `results_standardDca.csv`, `results_dynamicDca.csv`, and
//! `results_valueAveraging.csv`.

use crate::domain::error::DcasimError;
use crate::domain::params::SimulationParams;
use crate::domain::strategy::{StrategyResult, TimeSeriesPoint};
use crate::ports::report_port::ReportPort;
use std::path::{Path, PathBuf};

pub struct CsvReportAdapter;

fn strategy_path(output_path: &Path, strategy: &str) -> PathBuf {
    let stem = output_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "results".to_string());
    output_path.with_file_name(format!("{stem}_{strategy}.csv"))
}

fn write_series(path: &Path, series: &[TimeSeriesPoint]) -> Result<(), DcasimError> {
    let mut wtr = csv::Writer::from_path(path).map_err(|e| DcasimError::Data {
        reason: format!("failed to open {}: {}", path.display(), e),
    })?;

    wtr.write_record([
        "date",
        "price",
        "asset_accumulated",
        "portfolio_value",
        "average_cost_basis",
        "usd_invested",
        "period_investment",
    ])
    .map_err(|e| DcasimError::Data {
        reason: format!("CSV write error: {}", e),
    })?;

    for row in series {
        wtr.write_record([
            row.date.format("%Y-%m-%d").to_string(),
            row.price.to_string(),
            row.asset_accumulated.to_string(),
            row.portfolio_value.to_string(),
            row.average_cost_basis.to_string(),
            row.usd_invested.to_string(),
            row.period_investment.to_string(),
        ])
        .map_err(|e| DcasimError::Data {
            reason: format!("CSV write error: {}", e),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

impl ReportPort for CsvReportAdapter {
    fn write(
        &self,
        results: &[StrategyResult],
        _params: &SimulationParams,
        output_path: &Path,
    ) -> Result<(), DcasimError> {
        for result in results {
            let path = strategy_path(output_path, result.strategy_name.as_str());
            write_series(&path, &result.time_series)?;
        }
        Ok(())
    }
}
