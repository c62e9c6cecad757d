//! # Podium
//!
//! Seller performance reports from raw sales records: per-seller revenue,
//! profit, sales volume, top-selling products, and a rank-based bonus, all
//! computed in one synchronous in-memory pass.
//!
//! ## Usage
//!
//! ```no_run
//! use podium::{analyze, AnalyzeOptions, Dataset};
//!
//! # fn load_dataset() -> Dataset { unimplemented!() }
//! let dataset = load_dataset();
//! let report = analyze(&dataset, &AnalyzeOptions::standard())?;
//! for row in &report {
//!     println!("{}: profit {:.2}, bonus {:.2}", row.name, row.profit, row.bonus);
//! }
//! # Ok::<(), podium::Error>(())
//! ```
//!
//! ## Modules
//!
//! - `dataset` - Immutable input records: sellers, products, purchases, customers
//! - `error` - Crate-level error type and `Result` alias
//! - `policy` - Injected revenue/bonus callbacks and the canonical defaults
//! - `report` - The four-stage analysis pipeline and its output rows

pub mod dataset;
pub mod error;
pub mod policy;
pub mod report;

pub use dataset::{Customer, Dataset, LineItem, Product, PurchaseRecord, Seller};
pub use error::{Error, Result};
pub use policy::{bonus_by_profit, simple_revenue, AnalyzeOptions, BonusFn, RevenueFn};
pub use report::{analyze, ReportRow, SellerStat, TopProduct};
