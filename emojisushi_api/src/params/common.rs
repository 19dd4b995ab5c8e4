//! Shared parameter infrastructure: the [`Params`] trait and the
//! pagination/lookup shapes used by several endpoints.

use serde::Serialize;
use serde_json::{Map, Value};

/// Trait implemented by every operation's parameter type.
///
/// Parameters serialize to a flat JSON object that becomes the query string
/// (GET) or the JSON body (POST). `None` fields are omitted.
pub trait Params: Serialize {
    fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Raw parameters, for fields the typed builders do not cover yet.
impl Params for Map<String, Value> {
    fn to_map(&self) -> Map<String, Value> {
        self.clone()
    }
}

/// Parameters for operations that take none.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct NoParams {}

impl Params for NoParams {}

/// A slug or a numeric id; the backend accepts either.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SlugOrId {
    Slug(String),
    Id(i64),
}

impl From<&str> for SlugOrId {
    fn from(slug: &str) -> Self {
        SlugOrId::Slug(slug.to_string())
    }
}

impl From<String> for SlugOrId {
    fn from(slug: String) -> Self {
        SlugOrId::Slug(slug)
    }
}

impl From<i64> for SlugOrId {
    fn from(id: i64) -> Self {
        SlugOrId::Id(id)
    }
}

impl std::str::FromStr for SlugOrId {
    type Err = std::convert::Infallible;

    /// Input that is exactly a canonical integer is treated as an id, so
    /// slugs like `007` or `+7` stay slugs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(id) if id.to_string() == s => SlugOrId::Id(id),
            _ => SlugOrId::Slug(s.to_string()),
        })
    }
}

/// Offset/limit pagination.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct PageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl Params for PageParams {}

impl PageParams {
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Lookup by `id`, used for categories, payment and shipping methods.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct IdLookup {
    pub id: i64,
}

impl Params for IdLookup {}

impl IdLookup {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}
