//! The seller performance report pipeline.
//!
//! Four ordered stages, each a pure transformation over in-memory data:
//!
//! 1. validate - all-or-nothing gates over the dataset and the options
//! 2. index - seller accumulators plus id/sku lookup maps
//! 3. aggregate - one pass over purchase records folding revenue, profit,
//!    sales counts, and per-sku line-item counts
//! 4. rank - profit-descending sort, per-rank bonus, top-product lists,
//!    conversion to immutable rows
//!
//! Data flows strictly forward; a failure at any stage aborts the whole
//! run with no partial result. The index structures live only for the
//! duration of one [`analyze`] call, so concurrent calls over distinct
//! datasets never share state.

mod aggregate;
mod index;
mod rank;
mod row;
mod stats;
mod validate;

pub use row::{ReportRow, TopProduct};
pub use stats::SellerStat;

use tracing::info;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::policy::AnalyzeOptions;

/// Compute the seller performance report for one dataset.
///
/// Returns one row per input seller, ordered by profit descending. Fails
/// with [`Error::InvalidData`](crate::Error::InvalidData) or
/// [`Error::InvalidOptions`](crate::Error::InvalidOptions) before any
/// processing, and with [`Error::UnknownSeller`](crate::Error::UnknownSeller)
/// or [`Error::UnknownProduct`](crate::Error::UnknownProduct) when a
/// purchase record references an identifier the dataset does not define.
pub fn analyze(dataset: &Dataset, options: &AnalyzeOptions) -> Result<Vec<ReportRow>> {
    validate::validate_dataset(dataset)?;
    let (revenue, bonus) = validate::validate_options(options)?;

    let mut indexes = index::build_indexes(dataset);
    aggregate::accumulate(dataset, revenue, &mut indexes)?;
    let rows = rank::rank_and_convert(indexes.stats, bonus);

    info!(
        "analyzed {} purchase records across {} sellers",
        dataset.purchase_records.len(),
        rows.len()
    );
    Ok(rows)
}
