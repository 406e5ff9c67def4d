//! Shopify Admin REST API request and response types.
//!
//! Only the fields the repricer reads are modelled; serde ignores the rest.
//!
//! ### `products`
//! `products.json` is expected to carry a `products` array. Error bodies such
//! as `{"errors": "Not Found"}` come back without it, so the field is optional
//! here and its absence is reported by the client instead of being mistaken
//! for an empty page.
//!
//! ### Metafield `value`
//! Usually a string (`"2.5"`), but typed metafields can surface as JSON numbers
//! or booleans. Kept as a raw [`serde_json::Value`] and flattened to text when
//! converted into a [`RawAttribute`].

use repricer_core::{Item, ItemId, RawAttribute, SellableUnit, UnitId};
use serde::{Deserialize, Serialize};

/// Top-level response from `GET /admin/api/{version}/products.json`.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}

#[derive(Debug, Deserialize)]
pub struct Product {
    /// Shopify numeric product ID.
    pub id: i64,

    #[serde(default)]
    pub title: String,

    /// Variants in storefront order; the first is the default variant.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

#[derive(Debug, Deserialize)]
pub struct Variant {
    pub id: i64,

    /// Current price as a decimal string (e.g. `"30.00"`).
    #[serde(default)]
    pub price: Option<String>,
}

/// Top-level response from `GET /admin/api/{version}/products/{id}/metafields.json`.
#[derive(Debug, Deserialize)]
pub struct MetafieldsResponse {
    pub metafields: Vec<Metafield>,
}

#[derive(Debug, Deserialize)]
pub struct Metafield {
    pub key: String,

    #[serde(default)]
    pub value: serde_json::Value,
}

/// Body of `PUT /admin/api/{version}/variants/{id}.json`.
#[derive(Debug, Serialize)]
pub struct VariantUpdateRequest {
    pub variant: VariantPriceUpdate,
}

#[derive(Debug, Serialize)]
pub struct VariantPriceUpdate {
    pub id: i64,
    /// Price rounded to cents, e.g. `"14935.00"`.
    pub price: String,
}

impl From<Product> for Item {
    fn from(product: Product) -> Self {
        Item {
            id: ItemId(product.id),
            title: product.title,
            sellable_units: product
                .variants
                .into_iter()
                .map(|variant| SellableUnit {
                    id: UnitId(variant.id),
                    price: variant.price.unwrap_or_default(),
                })
                .collect(),
        }
    }
}

impl From<Metafield> for RawAttribute {
    fn from(metafield: Metafield) -> Self {
        let value = match metafield.value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        };
        RawAttribute {
            key: metafield.key,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_converts_to_item_preserving_variant_order() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 11,
            "title": "Gold Ring",
            "variants": [
                {"id": 101, "price": "10.00"},
                {"id": 102, "price": "12.00"}
            ]
        }))
        .unwrap();

        let item = Item::from(product);
        assert_eq!(item.id, ItemId(11));
        assert_eq!(item.title, "Gold Ring");
        assert_eq!(item.primary_unit().map(|u| u.id), Some(UnitId(101)));
        assert_eq!(item.sellable_units.len(), 2);
    }

    #[test]
    fn product_without_variants_field_has_no_units() {
        let product: Product =
            serde_json::from_value(serde_json::json!({"id": 12, "title": "Gift Card"})).unwrap();
        assert!(Item::from(product).primary_unit().is_none());
    }

    #[test]
    fn products_field_is_optional() {
        let parsed: ProductsResponse =
            serde_json::from_value(serde_json::json!({"errors": "Not Found"})).unwrap();
        assert!(parsed.products.is_none());
    }

    #[test]
    fn metafield_values_flatten_to_text() {
        let parsed: MetafieldsResponse = serde_json::from_value(serde_json::json!({
            "metafields": [
                {"key": "material_weight", "value": "2.5", "namespace": "custom"},
                {"key": "addon_weight", "value": 0.5},
                {"key": "addon_fixed_cost", "value": null}
            ]
        }))
        .unwrap();

        let raw: Vec<RawAttribute> = parsed.metafields.into_iter().map(Into::into).collect();
        assert_eq!(raw[0], RawAttribute::new("material_weight", "2.5"));
        assert_eq!(raw[1], RawAttribute::new("addon_weight", "0.5"));
        assert_eq!(raw[2], RawAttribute::new("addon_fixed_cost", ""));
    }

    #[test]
    fn variant_update_serializes_to_admin_shape() {
        let body = VariantUpdateRequest {
            variant: VariantPriceUpdate {
                id: 7,
                price: "14935.00".to_owned(),
            },
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"variant": {"id": 7, "price": "14935.00"}})
        );
    }
}
