//! Injected pricing policies and the options object that carries them.
//!
//! The analysis contracts only on the callback signatures and their numeric
//! outputs, never on their internals. The two canonical policies shipped
//! here reproduce the stock behavior; callers swap in their own closures
//! through [`AnalyzeOptions::with_revenue`] and [`AnalyzeOptions::with_bonus`].

use crate::dataset::{LineItem, Product};
use crate::report::SellerStat;

/// Revenue policy: the amount a single line item earned.
pub type RevenueFn = Box<dyn Fn(&LineItem, &Product) -> f64 + Send + Sync>;

/// Bonus policy: the bonus for the seller ranked `index` out of `total`,
/// given the seller's final accumulator state.
pub type BonusFn = Box<dyn Fn(usize, usize, &SellerStat) -> f64 + Send + Sync>;

/// The two policy slots [`analyze`](crate::analyze) requires.
///
/// Both slots must be filled or the options gate rejects the run. The slots
/// hold callables by construction, so the gate only checks presence.
/// [`AnalyzeOptions::new`] starts with both empty; [`AnalyzeOptions::standard`]
/// carries the canonical policies.
pub struct AnalyzeOptions {
    pub calculate_revenue: Option<RevenueFn>,
    pub calculate_bonus: Option<BonusFn>,
}

impl AnalyzeOptions {
    /// Options with both policy slots empty.
    pub fn new() -> Self {
        Self {
            calculate_revenue: None,
            calculate_bonus: None,
        }
    }

    /// Options carrying the canonical policies: discounted sale revenue and
    /// the profit-rank bonus ladder.
    pub fn standard() -> Self {
        Self::new()
            .with_revenue(simple_revenue)
            .with_bonus(bonus_by_profit)
    }

    /// Set the revenue policy.
    pub fn with_revenue<F>(mut self, policy: F) -> Self
    where
        F: Fn(&LineItem, &Product) -> f64 + Send + Sync + 'static,
    {
        self.calculate_revenue = Some(Box::new(policy));
        self
    }

    /// Set the bonus policy.
    pub fn with_bonus<F>(mut self, policy: F) -> Self
    where
        F: Fn(usize, usize, &SellerStat) -> f64 + Send + Sync + 'static,
    {
        self.calculate_bonus = Some(Box::new(policy));
        self
    }
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical revenue policy: sale price less the percentage discount, times
/// quantity. The product record is accepted for signature compatibility but
/// not consulted.
pub fn simple_revenue(item: &LineItem, _product: &Product) -> f64 {
    item.sale_price * (1.0 - item.discount / 100.0) * f64::from(item.quantity)
}

/// Canonical bonus policy: a four-branch ladder over profit rank.
///
/// Branch precedence is load-bearing and must not be reordered: the top
/// seller takes 15%, ranks one and two take 10%, the last rank takes
/// nothing, everyone else takes 5%. A sole seller matches the top branch,
/// and with two sellers the runner-up matches `index <= 2` before the
/// last-rank branch, so it still earns 10%.
pub fn bonus_by_profit(index: usize, total: usize, seller: &SellerStat) -> f64 {
    if index == 0 {
        seller.profit * 0.15
    } else if index <= 2 {
        seller.profit * 0.10
    } else if index + 1 == total {
        0.0
    } else {
        seller.profit * 0.05
    }
}
