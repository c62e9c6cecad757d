//! Per-seller accumulator mutated during aggregation.

use std::collections::HashMap;

use crate::dataset::Seller;

/// Running totals for one seller.
///
/// Created zeroed by the indexer, folded over purchase records by the
/// aggregator, and converted into a [`ReportRow`](super::ReportRow) once
/// ranking is done. The bonus policy receives a shared reference to the
/// final state.
#[derive(Debug, Clone)]
pub struct SellerStat {
    pub id: String,
    /// Display name: `first_name` and `last_name` joined with a space.
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    /// Number of purchase records, not line items.
    pub sales_count: u64,
    /// sku -> number of line items that referenced it (not summed quantity).
    pub products_sold: HashMap<String, u64>,
}

impl SellerStat {
    pub(crate) fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            name: format!("{} {}", seller.first_name, seller.last_name),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: HashMap::new(),
        }
    }

    /// Fold one purchase record's header into the totals.
    pub(crate) fn record_sale(&mut self, total_amount: f64) {
        self.sales_count += 1;
        self.revenue += total_amount;
    }

    /// Fold one line item's margin and sku occurrence into the totals.
    pub(crate) fn record_item(&mut self, sku: &str, margin: f64) {
        self.profit += margin;
        *self.products_sold.entry(sku.to_string()).or_insert(0) += 1;
    }
}
