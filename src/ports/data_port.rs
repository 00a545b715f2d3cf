//! Price-history access port trait.

use crate::domain::error::DcasimError;
use crate::domain::price::PricePoint;

/// Supplier of historical price series. Implementations must return the
/// series date-ascending with valid calendar dates; the engine re-checks
/// price positivity but trusts the ordering.
pub trait DataPort {
    fn fetch_price_history(&self, asset: &str) -> Result<Vec<PricePoint>, DcasimError>;

    fn list_assets(&self) -> Result<Vec<String>, DcasimError>;
}
