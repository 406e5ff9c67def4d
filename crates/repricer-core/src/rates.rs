use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The three per-job inputs that drive price computation.
///
/// Supplied once when a job starts and never mutated while it runs. No range
/// checks are applied here: a negative rate is carried into the arithmetic
/// as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateParameters {
    /// Price per unit of material weight.
    pub material_rate: Decimal,
    /// Labor cost per unit of total (material + add-on) weight.
    pub labor_rate: Decimal,
    /// Tax percentage applied to the full base price, e.g. `3` for 3%.
    pub tax_rate_percent: Decimal,
}

impl RateParameters {
    #[must_use]
    pub fn new(material_rate: Decimal, labor_rate: Decimal, tax_rate_percent: Decimal) -> Self {
        Self {
            material_rate,
            labor_rate,
            tax_rate_percent,
        }
    }
}
