//! Typed per-item attributes and the defaulting rules applied when building them.
//!
//! The catalog store hands back loosely typed key/value pairs. Three keys feed
//! the price calculator, each also accepted under its legacy name; everything
//! else is ignored. A key that is absent, or whose value does not start with a
//! number, resolves to zero.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const MATERIAL_WEIGHT_KEY: &str = "material_weight";
pub const ADDON_FIXED_COST_KEY: &str = "addon_fixed_cost";
pub const ADDON_WEIGHT_KEY: &str = "addon_weight";

/// Keys used by stores set up for the storefront's first version. Each one is
/// read only when its current counterpart is absent.
pub const LEGACY_MATERIAL_WEIGHT_KEY: &str = "gold_weight";
pub const LEGACY_ADDON_FIXED_COST_KEY: &str = "diamond_price";
pub const LEGACY_ADDON_WEIGHT_KEY: &str = "diamond_weight";

/// Optional sign, integer digits, optional fraction, optional exponent.
/// At least one digit is enforced by the caller.
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])?(\d*)(?:\.(\d*))?(?:[eE]([+-]?\d+))?").expect("valid regex")
});

/// One raw custom attribute as returned by the catalog store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAttribute {
    pub key: String,
    pub value: String,
}

impl RawAttribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Calculator inputs for a single item. Built once per item; never shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAttributes {
    pub material_weight: Decimal,
    pub addon_fixed_cost: Decimal,
    pub addon_weight: Decimal,
}

impl ItemAttributes {
    /// Extracts the three calculator keys from `raw`.
    ///
    /// The first occurrence of a key wins, and a current key wins over its
    /// legacy name. Values are read with [`parse_leading_decimal`], so
    /// `"2.5 g"` becomes `2.5` and `"n/a"` becomes `0`.
    #[must_use]
    pub fn from_raw(raw: &[RawAttribute]) -> Self {
        let find = |key: &str| raw.iter().find(|attr| attr.key == key);
        let lookup = |key: &str, legacy_key: &str| -> Decimal {
            find(key)
                .or_else(|| find(legacy_key))
                .map_or(Decimal::ZERO, |attr| parse_leading_decimal(&attr.value))
        };

        Self {
            material_weight: lookup(MATERIAL_WEIGHT_KEY, LEGACY_MATERIAL_WEIGHT_KEY),
            addon_fixed_cost: lookup(ADDON_FIXED_COST_KEY, LEGACY_ADDON_FIXED_COST_KEY),
            addon_weight: lookup(ADDON_WEIGHT_KEY, LEGACY_ADDON_WEIGHT_KEY),
        }
    }

    /// Combined weight the labor rate is charged against.
    #[must_use]
    pub fn total_weight(&self) -> Decimal {
        self.material_weight.saturating_add(self.addon_weight)
    }
}

/// Reads the longest decimal literal at the start of `value`.
///
/// Leading and trailing whitespace is ignored. Returns zero when the value does
/// not begin with a number or the number cannot be represented as a [`Decimal`].
#[must_use]
pub fn parse_leading_decimal(value: &str) -> Decimal {
    let trimmed = value.trim();
    let Some(caps) = LEADING_NUMBER.captures(trimmed) else {
        return Decimal::ZERO;
    };

    let sign = match caps.get(1).map(|m| m.as_str()) {
        Some("-") => "-",
        _ => "",
    };
    let int_part = caps.get(2).map_or("", |m| m.as_str());
    let frac_part = caps.get(3).map_or("", |m| m.as_str());
    if int_part.is_empty() && frac_part.is_empty() {
        return Decimal::ZERO;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let mantissa = if frac_part.is_empty() {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac_part}")
    };

    let parsed = match caps.get(4) {
        Some(exp) => Decimal::from_scientific(&format!("{mantissa}e{}", exp.as_str())),
        None => Decimal::from_str(&mantissa),
    };
    parsed.unwrap_or(Decimal::ZERO)
}
