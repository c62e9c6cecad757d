//! Lookup structures for sellers and products.

use std::collections::HashMap;

use crate::dataset::{Dataset, Product};

use super::stats::SellerStat;

/// Index structures owned by one analysis call and discarded on return.
pub(crate) struct Indexes<'a> {
    /// One accumulator per input seller, in input order.
    pub stats: Vec<SellerStat>,
    /// Seller id -> slot in `stats`. Duplicate ids resolve to the last
    /// occurrence; earlier accumulators stay zeroed but remain in `stats`.
    pub seller_slots: HashMap<&'a str, usize>,
    /// Product sku -> input record. Duplicate skus resolve to the last
    /// occurrence.
    pub products: HashMap<&'a str, &'a Product>,
}

/// Build the seller and product indexes in one pass over the input.
///
/// Pure function of the dataset, O(sellers + products), no failure modes:
/// identifier collisions fold last-write-wins into the maps.
pub(crate) fn build_indexes(dataset: &Dataset) -> Indexes<'_> {
    let stats: Vec<SellerStat> = dataset.sellers.iter().map(SellerStat::new).collect();

    let seller_slots: HashMap<&str, usize> = dataset
        .sellers
        .iter()
        .enumerate()
        .map(|(slot, seller)| (seller.id.as_str(), slot))
        .collect();

    let products: HashMap<&str, &Product> = dataset
        .products
        .iter()
        .map(|product| (product.sku.as_str(), product))
        .collect();

    Indexes {
        stats,
        seller_slots,
        products,
    }
}
