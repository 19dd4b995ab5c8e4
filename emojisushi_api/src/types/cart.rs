//! Cart contents of the current session.

use serde::{Deserialize, Serialize};

use crate::hydrate::{Descriptor, Field, FieldKind};

use super::product::{Product, PRODUCT_KIND};

/// A line in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartProduct {
    /// Cart line id, used by `cart/remove`.
    pub id: i64,
    pub product_id: i64,
    pub variant_id: Option<i64>,
    pub quantity: i64,
    pub product: Option<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub data: Vec<CartProduct>,
}

impl Cart {
    /// First cart line for `product_id`. When `variant_id` is given the line's
    /// variant must equal it exactly.
    pub fn find(&self, product_id: i64, variant_id: Option<i64>) -> Option<&CartProduct> {
        self.data.iter().find(|line| {
            if variant_id.is_some() && line.variant_id != variant_id {
                return false;
            }
            line.product_id == product_id
        })
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

pub(crate) static CART_PRODUCT: Descriptor = Descriptor {
    name: "CartProduct",
    fields: &[
        Field {
            name: "id",
            kind: FieldKind::Int,
        },
        Field {
            name: "product_id",
            kind: FieldKind::Int,
        },
        Field {
            name: "variant_id",
            kind: FieldKind::Nullable(&FieldKind::Int),
        },
        Field {
            name: "quantity",
            kind: FieldKind::Int,
        },
        Field {
            name: "product",
            kind: FieldKind::Nullable(&PRODUCT_KIND),
        },
    ],
};
static CART_PRODUCT_KIND: FieldKind = FieldKind::Entity(&CART_PRODUCT);

pub(crate) static CART: Descriptor = Descriptor {
    name: "Cart",
    fields: &[Field {
        name: "data",
        kind: FieldKind::List(&CART_PRODUCT_KIND),
    }],
};

entity!(CartProduct => CART_PRODUCT);
entity!(Cart => CART);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Hydrator;

    fn cart() -> Cart {
        Hydrator::new()
            .hydrate(&json!({
                "data": [
                    {"id": 100, "product_id": 1, "quantity": 2},
                    {"id": 101, "product_id": 1, "variant_id": 7, "quantity": 1},
                    {"id": 102, "product_id": 2, "variant_id": 8, "quantity": 3}
                ]
            }))
            .unwrap()
    }

    #[test]
    fn without_variant_first_product_line_wins() {
        assert_eq!(cart().find(1, None).map(|l| l.id), Some(100));
    }

    #[test]
    fn variant_must_match_exactly() {
        let cart = cart();
        assert_eq!(cart.find(1, Some(7)).map(|l| l.id), Some(101));
        assert!(cart.find(1, Some(8)).is_none());
        assert!(cart.find(3, None).is_none());
    }
}
