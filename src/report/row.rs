//! Immutable report output.

use serde::{Deserialize, Serialize};

/// One product's line-item count within a seller's report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    /// Number of line items that referenced the sku, not units sold.
    pub quantity: u64,
}

/// One seller's final report entry.
///
/// Rows come back from [`analyze`](crate::analyze) ordered by profit
/// descending and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub seller_id: String,
    pub name: String,
    /// Total charged across the seller's records, rounded to cents.
    pub revenue: f64,
    /// Accumulated margin across line items, rounded to cents.
    pub profit: f64,
    pub sales_count: u64,
    /// At most ten products, quantity descending, ascending sku on ties.
    pub top_products: Vec<TopProduct>,
    /// Rank bonus from the injected policy, rounded to cents.
    pub bonus: f64,
}

/// Round to two decimals, halves away from zero.
pub(crate) fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
