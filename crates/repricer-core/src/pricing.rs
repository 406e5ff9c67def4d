//! Price computation from item attributes and job rates.
//!
//! ```text
//! base  = material_rate * material_weight
//!       + labor_rate * (material_weight + addon_weight)
//!       + addon_fixed_cost
//! price = base * (1 + tax_rate_percent / 100)
//! ```
//!
//! Tax is applied to the whole base, never to individual components. The
//! result is kept at full precision and only rounded to cents when it is
//! rendered for transmission.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};

use crate::attributes::ItemAttributes;
use crate::rates::RateParameters;

/// Number of decimal places a price is rounded to when transmitted.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// A freshly derived price. Never cached across items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputedPrice(Decimal);

impl ComputedPrice {
    /// The unrounded value.
    #[must_use]
    pub fn exact(&self) -> Decimal {
        self.0
    }

    /// The value rounded half away from zero to two decimal places, with the
    /// scale pinned at two so `0` renders as `0.00`.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        let mut rounded = self
            .0
            .round_dp_with_strategy(PRICE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(PRICE_DECIMAL_PLACES);
        rounded
    }
}

impl std::fmt::Display for ComputedPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rounded())
    }
}

impl Serialize for ComputedPrice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Computes the price for one item.
///
/// Total: missing attributes are already zero, and every step saturates
/// rather than overflowing.
#[must_use]
pub fn compute_price(attributes: &ItemAttributes, rates: &RateParameters) -> ComputedPrice {
    let material = rates
        .material_rate
        .saturating_mul(attributes.material_weight);
    let labor = rates.labor_rate.saturating_mul(attributes.total_weight());
    let base = material
        .saturating_add(labor)
        .saturating_add(attributes.addon_fixed_cost);

    let tax_multiplier = Decimal::ONE.saturating_add(rates.tax_rate_percent / Decimal::ONE_HUNDRED);
    ComputedPrice(base.saturating_mul(tax_multiplier))
}
