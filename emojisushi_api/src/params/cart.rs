use serde::Serialize;

use super::common::Params;

/// Body of `cart/add`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct AddCartProduct {
    pub product_id: i64,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<i64>,
}

impl Params for AddCartProduct {}

impl AddCartProduct {
    pub fn new(product_id: i64, quantity: i64) -> Self {
        Self {
            product_id,
            quantity,
            variant_id: None,
        }
    }

    pub fn with_variant(mut self, variant_id: i64) -> Self {
        self.variant_id = Some(variant_id);
        self
    }
}

/// Body of `cart/remove`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RemoveCartProduct {
    pub cart_product_id: i64,
}

impl Params for RemoveCartProduct {}

impl RemoveCartProduct {
    pub fn new(cart_product_id: i64) -> Self {
        Self { cart_product_id }
    }
}

/// Client-side cart lookup. With `variant_id` set, only a line with exactly
/// that variant matches.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CartProductLookup {
    pub product_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<i64>,
}

impl Params for CartProductLookup {}

impl CartProductLookup {
    pub fn new(product_id: i64) -> Self {
        Self {
            product_id,
            variant_id: None,
        }
    }

    pub fn with_variant(mut self, variant_id: i64) -> Self {
        self.variant_id = Some(variant_id);
        self
    }
}
