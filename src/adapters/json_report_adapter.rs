//! JSON report adapter.
//!
//! Serializes the full three-strategy snapshot in the shape the comparison
//! dashboard consumes: an array of `{strategyName, timeSeries, metrics}`
//! objects with camelCase fields.

use crate::domain::error::DcasimError;
use crate::domain::params::SimulationParams;
use crate::domain::strategy::StrategyResult;
use crate::ports::report_port::ReportPort;
use std::fs;
use std::path::Path;

pub struct JsonReportAdapter;

impl ReportPort for JsonReportAdapter {
    fn write(
        &self,
        results: &[StrategyResult],
        _params: &SimulationParams,
        output_path: &Path,
    ) -> Result<(), DcasimError> {
        let json = serde_json::to_string_pretty(results).map_err(|e| DcasimError::Data {
            reason: format!("failed to serialize results: {}", e),
        })?;
        fs::write(output_path, json)?;
        Ok(())
    }
}
