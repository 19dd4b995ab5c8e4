//! Spots: the physical outlets orders are prepared at.

use serde::{Deserialize, Serialize};

use crate::hydrate::{Descriptor, Field, FieldKind};

use super::city::{City, CITY_KIND};
use super::meta::{PaginationMeta, PAGINATION_META_KIND};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub address: Option<String>,
    pub phones: Option<String>,
    pub city_id: i64,
    /// Embedded city, when the backend includes it.
    pub city: Option<City>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotsList {
    pub data: Vec<Spot>,
    pub meta: Option<PaginationMeta>,
}

pub(crate) static SPOT: Descriptor = Descriptor {
    name: "Spot",
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
            name: "address",
            kind: FieldKind::Nullable(&FieldKind::Str),
        },
        Field {
            name: "phones",
            kind: FieldKind::Nullable(&FieldKind::Str),
        },
        Field {
            name: "city_id",
            kind: FieldKind::Int,
        },
        Field {
            name: "city",
            kind: FieldKind::Nullable(&CITY_KIND),
        },
    ],
};
pub(crate) static SPOT_KIND: FieldKind = FieldKind::Entity(&SPOT);

pub(crate) static SPOTS_LIST: Descriptor = Descriptor {
    name: "SpotsList",
    fields: &[
        Field {
            name: "data",
            kind: FieldKind::List(&SPOT_KIND),
        },
        Field {
            name: "meta",
            kind: FieldKind::Nullable(&PAGINATION_META_KIND),
        },
    ],
};

entity!(Spot => SPOT);
entity!(SpotsList => SPOTS_LIST);
