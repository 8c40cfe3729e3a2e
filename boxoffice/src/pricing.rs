//! Per-row seat pricing.

use crate::types::Money;
use serde::{Deserialize, Serialize};

/// Linear row pricing: `base_price - row * row_discount`.
///
/// Nothing clamps the result, so with enough rows a seat can be free or
/// priced below zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Price of a seat in row `A`
    pub base_price: i64,
    /// Amount taken off for each row further back
    pub row_discount: i64,
}

impl PricingPolicy {
    /// Creates a pricing policy
    #[must_use]
    pub const fn new(base_price: i64, row_discount: i64) -> Self {
        Self {
            base_price,
            row_discount,
        }
    }

    /// Price of any seat in `row`
    #[must_use]
    pub fn price_for_row(&self, row: usize) -> Money {
        let row = i64::try_from(row).unwrap_or(i64::MAX);
        Money::new(
            self.base_price
                .saturating_sub(row.saturating_mul(self.row_discount)),
        )
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::new(10, 2)
    }
}
