use serde::Serialize;

use super::common::Params;

#[derive(Clone, Debug, Default, Serialize)]
pub struct ProductsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Restrict to one category, e.g. `menu` for the whole menu.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_slug: Option<String>,
}

impl Params for ProductsParams {}

impl ProductsParams {
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_category_slug(mut self, slug: &str) -> Self {
        self.category_slug = Some(slug.to_string());
        self
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ProductLookup {
    pub product_id: i64,
}

impl Params for ProductLookup {}

impl ProductLookup {
    pub fn new(product_id: i64) -> Self {
        Self { product_id }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct VariantLookup {
    pub variant_id: i64,
}

impl Params for VariantLookup {}

impl VariantLookup {
    pub fn new(variant_id: i64) -> Self {
        Self { variant_id }
    }
}
