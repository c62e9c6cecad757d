//! All-or-nothing input gates run before any processing.

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::policy::{AnalyzeOptions, BonusFn, RevenueFn};

/// Reject datasets with any required collection empty.
///
/// Runs strictly before the options gate; nothing downstream sees a dataset
/// that failed here.
pub(crate) fn validate_dataset(dataset: &Dataset) -> Result<()> {
    if dataset.sellers.is_empty()
        || dataset.products.is_empty()
        || dataset.purchase_records.is_empty()
        || dataset.customers.is_empty()
    {
        return Err(Error::InvalidData);
    }
    Ok(())
}

/// Reject options with either policy slot unset, handing back both
/// callbacks when the gate passes.
pub(crate) fn validate_options(options: &AnalyzeOptions) -> Result<(&RevenueFn, &BonusFn)> {
    match (&options.calculate_revenue, &options.calculate_bonus) {
        (Some(revenue), Some(bonus)) => Ok((revenue, bonus)),
        _ => Err(Error::InvalidOptions),
    }
}
