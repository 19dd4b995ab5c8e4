//! Cities served by the restaurant and their delivery districts.

use serde::{Deserialize, Serialize};

use crate::hydrate::{Descriptor, Field, FieldKind};

use super::meta::{PaginationMeta, PAGINATION_META_KIND};
use super::spot::{Spot, SPOT_KIND};

/// A delivery district inside a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub id: i64,
    pub name: String,
    pub city_id: i64,
}

/// A city with its outlets and districts.
///
/// `spots` and `districts` are only populated when requested with
/// `includeSpots` / `includeDistricts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub slug: String,
    /// Whether this is the default city of the storefront.
    pub is_main: bool,
    pub spots: Vec<Spot>,
    pub districts: Vec<District>,
}

/// Response of the `cities` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitiesList {
    pub data: Vec<City>,
    pub meta: Option<PaginationMeta>,
}

pub(crate) static DISTRICT: Descriptor = Descriptor {
    name: "District",
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
            name: "city_id",
            kind: FieldKind::Int,
        },
    ],
};
static DISTRICT_KIND: FieldKind = FieldKind::Entity(&DISTRICT);

pub(crate) static CITY: Descriptor = Descriptor {
    name: "City",
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
            name: "is_main",
            kind: FieldKind::Bool,
        },
        Field {
            name: "spots",
            kind: FieldKind::List(&SPOT_KIND),
        },
        Field {
            name: "districts",
            kind: FieldKind::List(&DISTRICT_KIND),
        },
    ],
};
pub(crate) static CITY_KIND: FieldKind = FieldKind::Entity(&CITY);

pub(crate) static CITIES_LIST: Descriptor = Descriptor {
    name: "CitiesList",
    fields: &[
        Field {
            name: "data",
            kind: FieldKind::List(&CITY_KIND),
        },
        Field {
            name: "meta",
            kind: FieldKind::Nullable(&PAGINATION_META_KIND),
        },
    ],
};

entity!(District => DISTRICT);
entity!(City => CITY);
entity!(CitiesList => CITIES_LIST);
