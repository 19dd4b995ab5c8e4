//! Menu products and their purchasable variants.

use serde::{Deserialize, Serialize};

use crate::hydrate::{Descriptor, Field, FieldKind};

use super::category::{Category, CATEGORY_KIND};
use super::meta::{PaginationMeta, PAGINATION_META_KIND};

/// A single property value of a variant (size, filling, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: i64,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: i64,
    pub product_id: i64,
    pub attributes: Vec<Attribute>,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Base price, used when the product has no variants.
    pub price: f64,
    pub category_id: i64,
    pub category: Option<Category>,
    pub variants: Vec<Variant>,
}

impl Product {
    pub fn variant(&self, variant_id: i64) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }
}

/// Response of the `products` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsList {
    pub data: Vec<Product>,
    pub meta: Option<PaginationMeta>,
}

impl ProductsList {
    /// First product with the given id, in list order.
    pub fn find(&self, product_id: i64) -> Option<&Product> {
        self.data.iter().find(|p| p.id == product_id)
    }

    /// Scans products in list order and returns the first variant with the
    /// given id.
    pub fn find_variant(&self, variant_id: i64) -> Option<&Variant> {
        self.data.iter().find_map(|p| p.variant(variant_id))
    }
}

pub(crate) static ATTRIBUTE: Descriptor = Descriptor {
    name: "Attribute",
    fields: &[
        Field {
            name: "id",
            kind: FieldKind::Int,
        },
        Field {
            name: "name",
            kind: FieldKind::Str,
        },
        Field {
            name: "value",
            kind: FieldKind::Str,
        },
    ],
};
static ATTRIBUTE_KIND: FieldKind = FieldKind::Entity(&ATTRIBUTE);

pub(crate) static VARIANT: Descriptor = Descriptor {
    name: "Variant",
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
            name: "attributes",
            kind: FieldKind::List(&ATTRIBUTE_KIND),
        },
        Field {
            name: "price",
            kind: FieldKind::Float,
        },
    ],
};
static VARIANT_KIND: FieldKind = FieldKind::Entity(&VARIANT);

pub(crate) static PRODUCT: Descriptor = Descriptor {
    name: "Product",
    fields: &[
        Field {
            name: "id",
            kind: FieldKind::Int,
        },
        Field {
            name: "name",
            kind: FieldKind::Str,
        },
        Field {
            name: "slug",
            kind: FieldKind::Str,
        },
        Field {
            name: "description",
            kind: FieldKind::Nullable(&FieldKind::Str),
        },
        Field {
            name: "price",
            kind: FieldKind::Float,
        },
        Field {
            name: "category_id",
            kind: FieldKind::Int,
        },
        Field {
            name: "category",
            kind: FieldKind::Nullable(&CATEGORY_KIND),
        },
        Field {
            name: "variants",
            kind: FieldKind::List(&VARIANT_KIND),
        },
    ],
};
pub(crate) static PRODUCT_KIND: FieldKind = FieldKind::Entity(&PRODUCT);

pub(crate) static PRODUCTS_LIST: Descriptor = Descriptor {
    name: "ProductsList",
    fields: &[
        Field {
            name: "data",
            kind: FieldKind::List(&PRODUCT_KIND),
        },
        Field {
            name: "meta",
            kind: FieldKind::Nullable(&PAGINATION_META_KIND),
        },
    ],
};

entity!(Attribute => ATTRIBUTE);
entity!(Variant => VARIANT);
entity!(Product => PRODUCT);
entity!(ProductsList => PRODUCTS_LIST);
