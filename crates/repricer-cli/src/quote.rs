use clap::Args;
use rust_decimal::Decimal;

use repricer_core::{compute_price, ComputedPrice, ItemAttributes, RateParameters};

/// Item attributes given on the command line. Omitted values count as zero.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct AttributeArgs {
    #[arg(long, default_value_t = Decimal::ZERO)]
    pub material_weight: Decimal,
    #[arg(long, default_value_t = Decimal::ZERO)]
    pub addon_weight: Decimal,
    #[arg(long, default_value_t = Decimal::ZERO)]
    pub addon_fixed_cost: Decimal,
}

impl From<&AttributeArgs> for ItemAttributes {
    fn from(args: &AttributeArgs) -> Self {
        ItemAttributes {
            material_weight: args.material_weight,
            addon_fixed_cost: args.addon_fixed_cost,
            addon_weight: args.addon_weight,
        }
    }
}

pub(crate) fn quote(attributes: &AttributeArgs, rates: &RateParameters) -> ComputedPrice {
    compute_price(&ItemAttributes::from(attributes), rates)
}
