//! Input records for a sales analysis run.
//!
//! All types here are immutable inputs: the pipeline never mutates them,
//! only the derived accumulators. They derive serde traits so hosts can
//! move datasets across process boundaries; the crate itself does no I/O.

use serde::{Deserialize, Serialize};

/// A product available for sale, keyed by stock-keeping unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    /// Purchase cost per unit, used when computing profit margins.
    pub purchase_price: f64,
}

/// A seller whose performance the report measures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// A customer record. Required for dataset completeness; aggregation never
/// reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// One line of a purchase: a product, how many units, and the pricing terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub quantity: u32,
    pub sale_price: f64,
    /// Discount percentage in `[0, 100]`. Absent means no discount.
    #[serde(default)]
    pub discount: f64,
}

/// A single checkout made by one seller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    /// Total amount charged for the whole record. Revenue accumulation uses
    /// this figure directly and never recomputes it from the items.
    pub total_amount: f64,
    pub items: Vec<LineItem>,
}

/// The four input collections the analysis consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
    pub customers: Vec<Customer>,
}
