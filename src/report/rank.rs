//! Profit ranking, bonus assignment, and report row conversion.

use std::cmp::Ordering;

use tracing::debug;

use crate::policy::BonusFn;

use super::row::{round_to_cents, ReportRow, TopProduct};
use super::stats::SellerStat;

/// Each seller reports at most this many products.
const TOP_PRODUCTS_LIMIT: usize = 10;

/// Sort sellers by profit descending, assign bonuses by rank, and convert
/// the accumulators into immutable report rows.
///
/// The sort is stable, so profit ties keep input-seller order; tie order is
/// not part of the contract. The bonus policy sees each accumulator's final
/// state along with its zero-based rank and the total seller count.
pub(crate) fn rank_and_convert(mut stats: Vec<SellerStat>, bonus: &BonusFn) -> Vec<ReportRow> {
    stats.sort_by(|a, b| b.profit.partial_cmp(&a.profit).unwrap_or(Ordering::Equal));

    let total = stats.len();
    debug!("ranked {total} sellers by profit");

    stats
        .into_iter()
        .enumerate()
        .map(|(index, stat)| {
            let bonus_amount = bonus(index, total, &stat);
            let top_products = top_products(&stat);
            ReportRow {
                seller_id: stat.id,
                name: stat.name,
                revenue: round_to_cents(stat.revenue),
                profit: round_to_cents(stat.profit),
                sales_count: stat.sales_count,
                top_products,
                bonus: round_to_cents(bonus_amount),
            }
        })
        .collect()
}

/// The seller's most-sold products by line-item count, capped at ten.
///
/// Quantity ties break by ascending sku so equal inputs produce identical
/// reports run to run.
fn top_products(stat: &SellerStat) -> Vec<TopProduct> {
    let mut products: Vec<TopProduct> = stat
        .products_sold
        .iter()
        .map(|(sku, &quantity)| TopProduct {
            sku: sku.clone(),
            quantity,
        })
        .collect();
    products.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.sku.cmp(&b.sku)));
    products.truncate(TOP_PRODUCTS_LIMIT);
    products
}
