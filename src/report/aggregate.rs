//! Single-pass accumulation over purchase records.

use tracing::debug;

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::policy::RevenueFn;

use super::index::Indexes;

/// Fold every purchase record into the seller accumulators.
///
/// Walks records in input order. `sales_count` and `revenue` move once per
/// record; `profit` and the per-sku counters move once per line item, using
/// the injected revenue policy for the earned side of the margin. Unknown
/// seller ids and skus abort the whole run with no partial result.
pub(crate) fn accumulate(
    dataset: &Dataset,
    revenue: &RevenueFn,
    indexes: &mut Indexes<'_>,
) -> Result<()> {
    let Indexes {
        stats,
        seller_slots,
        products,
    } = indexes;

    for record in &dataset.purchase_records {
        let slot = *seller_slots
            .get(record.seller_id.as_str())
            .ok_or_else(|| Error::UnknownSeller(record.seller_id.clone()))?;
        let stat = &mut stats[slot];
        stat.record_sale(record.total_amount);

        for item in &record.items {
            let product = products
                .get(item.sku.as_str())
                .copied()
                .ok_or_else(|| Error::UnknownProduct(item.sku.clone()))?;
            let cost = product.purchase_price * f64::from(item.quantity);
            let item_revenue = revenue(item, product);
            stat.record_item(&item.sku, item_revenue - cost);
        }
    }

    debug!(
        "accumulated {} purchase records across {} sellers",
        dataset.purchase_records.len(),
        stats.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Customer, LineItem, Product, PurchaseRecord, Seller};
    use crate::policy::simple_revenue;
    use crate::report::index::build_indexes;
    use proptest::prelude::*;

    fn seller(id: &str) -> Seller {
        Seller {
            id: id.to_string(),
            first_name: "Test".to_string(),
            last_name: id.to_uppercase(),
        }
    }

    fn product(sku: &str, purchase_price: f64) -> Product {
        Product {
            sku: sku.to_string(),
            purchase_price,
        }
    }

    fn item(sku: &str, quantity: u32, sale_price: f64, discount: f64) -> LineItem {
        LineItem {
            sku: sku.to_string(),
            quantity,
            sale_price,
            discount,
        }
    }

    fn record(seller_id: &str, total_amount: f64, items: Vec<LineItem>) -> PurchaseRecord {
        PurchaseRecord {
            seller_id: seller_id.to_string(),
            total_amount,
            items,
        }
    }

    fn dataset(
        sellers: Vec<Seller>,
        products: Vec<Product>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> Dataset {
        Dataset {
            sellers,
            products,
            purchase_records,
            customers: vec![Customer {
                id: "c1".to_string(),
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
            }],
        }
    }

    fn standard_revenue() -> RevenueFn {
        Box::new(simple_revenue)
    }

    #[test]
    fn sales_count_and_revenue_move_once_per_record() {
        let dataset = dataset(
            vec![seller("s1")],
            vec![product("tea-01", 2.0)],
            vec![
                record("s1", 10.0, vec![item("tea-01", 1, 5.0, 0.0), item("tea-01", 1, 5.0, 0.0)]),
                record("s1", 7.5, vec![]),
            ],
        );
        let mut indexes = build_indexes(&dataset);

        accumulate(&dataset, &standard_revenue(), &mut indexes).unwrap();

        // Two records, not three items.
        assert_eq!(indexes.stats[0].sales_count, 2);
        assert_eq!(indexes.stats[0].revenue, 17.5);
    }

    #[test]
    fn revenue_uses_the_charged_total_not_the_items() {
        // The record's total deliberately disagrees with what the items
        // would sum to; the charged amount wins.
        let dataset = dataset(
            vec![seller("s1")],
            vec![product("tea-01", 2.0)],
            vec![record("s1", 99.0, vec![item("tea-01", 1, 5.0, 0.0)])],
        );
        let mut indexes = build_indexes(&dataset);

        accumulate(&dataset, &standard_revenue(), &mut indexes).unwrap();

        assert_eq!(indexes.stats[0].revenue, 99.0);
    }

    #[test]
    fn profit_is_item_revenue_minus_cost() {
        let dataset = dataset(
            vec![seller("s1")],
            vec![product("tea-01", 10.0)],
            vec![record("s1", 50.0, vec![item("tea-01", 1, 50.0, 0.0)])],
        );
        let mut indexes = build_indexes(&dataset);

        accumulate(&dataset, &standard_revenue(), &mut indexes).unwrap();

        assert_eq!(indexes.stats[0].profit, 40.0);
    }

    #[test]
    fn cost_scales_with_quantity() {
        // revenue 3 * 20 = 60, cost 3 * 4 = 12
        let dataset = dataset(
            vec![seller("s1")],
            vec![product("tea-01", 4.0)],
            vec![record("s1", 60.0, vec![item("tea-01", 3, 20.0, 0.0)])],
        );
        let mut indexes = build_indexes(&dataset);

        accumulate(&dataset, &standard_revenue(), &mut indexes).unwrap();

        assert_eq!(indexes.stats[0].profit, 48.0);
    }

    #[test]
    fn products_sold_counts_line_items_not_units() {
        let dataset = dataset(
            vec![seller("s1")],
            vec![product("tea-01", 1.0), product("mug-02", 1.0)],
            vec![
                record(
                    "s1",
                    0.0,
                    vec![item("tea-01", 5, 2.0, 0.0), item("mug-02", 1, 2.0, 0.0)],
                ),
                record("s1", 0.0, vec![item("tea-01", 2, 2.0, 0.0)]),
            ],
        );
        let mut indexes = build_indexes(&dataset);

        accumulate(&dataset, &standard_revenue(), &mut indexes).unwrap();

        // tea-01 appeared on two line items; its 7 units are irrelevant here.
        assert_eq!(indexes.stats[0].products_sold["tea-01"], 2);
        assert_eq!(indexes.stats[0].products_sold["mug-02"], 1);
    }

    #[test]
    fn records_credit_only_their_own_seller() {
        let dataset = dataset(
            vec![seller("s1"), seller("s2")],
            vec![product("tea-01", 1.0)],
            vec![
                record("s1", 10.0, vec![]),
                record("s2", 20.0, vec![]),
                record("s1", 30.0, vec![]),
            ],
        );
        let mut indexes = build_indexes(&dataset);

        accumulate(&dataset, &standard_revenue(), &mut indexes).unwrap();

        assert_eq!(indexes.stats[0].sales_count, 2);
        assert_eq!(indexes.stats[0].revenue, 40.0);
        assert_eq!(indexes.stats[1].sales_count, 1);
        assert_eq!(indexes.stats[1].revenue, 20.0);
    }

    #[test]
    fn the_injected_revenue_policy_drives_profit() {
        let dataset = dataset(
            vec![seller("s1")],
            vec![product("tea-01", 10.0)],
            vec![record("s1", 0.0, vec![item("tea-01", 1, 50.0, 0.0)])],
        );
        let mut indexes = build_indexes(&dataset);
        let flat: RevenueFn = Box::new(|_, _| 0.0);

        accumulate(&dataset, &flat, &mut indexes).unwrap();

        // Zero earned, full cost paid.
        assert_eq!(indexes.stats[0].profit, -10.0);
    }

    #[test]
    fn unknown_seller_id_fails_with_the_offending_id() {
        let dataset = dataset(
            vec![seller("s1")],
            vec![product("tea-01", 1.0)],
            vec![record("ghost", 10.0, vec![])],
        );
        let mut indexes = build_indexes(&dataset);

        let err = accumulate(&dataset, &standard_revenue(), &mut indexes).unwrap_err();

        assert_eq!(err, Error::UnknownSeller("ghost".to_string()));
    }

    #[test]
    fn unknown_sku_fails_with_the_offending_sku() {
        let dataset = dataset(
            vec![seller("s1")],
            vec![product("tea-01", 1.0)],
            vec![record("s1", 10.0, vec![item("vanished", 1, 5.0, 0.0)])],
        );
        let mut indexes = build_indexes(&dataset);

        let err = accumulate(&dataset, &standard_revenue(), &mut indexes).unwrap_err();

        assert_eq!(err, Error::UnknownProduct("vanished".to_string()));
    }

    proptest! {
        // sales_count equals the number of records naming the seller, no
        // matter how records are distributed.
        #[test]
        fn sales_count_matches_record_multiplicity(
            assignments in prop::collection::vec(0usize..3, 0..40)
        ) {
            let sellers = vec![seller("s0"), seller("s1"), seller("s2")];
            let records = assignments
                .iter()
                .map(|&slot| record(&format!("s{slot}"), 1.0, vec![]))
                .collect();
            let dataset = dataset(sellers, vec![product("tea-01", 1.0)], records);
            let mut indexes = build_indexes(&dataset);

            accumulate(&dataset, &standard_revenue(), &mut indexes).unwrap();

            for (slot, stat) in indexes.stats.iter().enumerate() {
                let expected = assignments.iter().filter(|&&a| a == slot).count() as u64;
                prop_assert_eq!(stat.sales_count, expected);
            }
        }
    }
}
