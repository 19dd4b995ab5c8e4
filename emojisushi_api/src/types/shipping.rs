use serde::{Deserialize, Serialize};

use crate::hydrate::{Descriptor, Field, FieldKind};

use super::meta::{PaginationMeta, PAGINATION_META_KIND};

/// A way of getting the order to the customer (courier, takeaway).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentMethod {
    pub id: i64,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentMethodsList {
    pub data: Vec<ShipmentMethod>,
    pub meta: Option<PaginationMeta>,
}

impl ShipmentMethodsList {
    pub fn find(&self, id: i64) -> Option<&ShipmentMethod> {
        self.data.iter().find(|m| m.id == id)
    }
}

pub(crate) static SHIPMENT_METHOD: Descriptor = Descriptor {
    name: "ShipmentMethod",
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
            name: "code",
            kind: FieldKind::Str,
        },
    ],
};
static SHIPMENT_METHOD_KIND: FieldKind = FieldKind::Entity(&SHIPMENT_METHOD);

pub(crate) static SHIPMENT_METHODS_LIST: Descriptor = Descriptor {
    name: "ShipmentMethodsList",
    fields: &[
        Field {
            name: "data",
            kind: FieldKind::List(&SHIPMENT_METHOD_KIND),
        },
        Field {
            name: "meta",
            kind: FieldKind::Nullable(&PAGINATION_META_KIND),
        },
    ],
};

entity!(ShipmentMethod => SHIPMENT_METHOD);
entity!(ShipmentMethodsList => SHIPMENT_METHODS_LIST);
