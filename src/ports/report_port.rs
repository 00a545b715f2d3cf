//! Report generation port trait.

use crate::domain::error::DcasimError;
use crate::domain::params::SimulationParams;
use crate::domain::strategy::StrategyResult;
use std::path::Path;

/// Port for writing a simulation's results. Results arrive as read-only
/// snapshots in fixed strategy order.
pub trait ReportPort {
    fn write(
        &self,
        results: &[StrategyResult],
        params: &SimulationParams,
        output_path: &Path,
    ) -> Result<(), DcasimError>;
}
