use serde::{Deserialize, Serialize};

use crate::hydrate::{Descriptor, Field, FieldKind};

use super::meta::{PaginationMeta, PAGINATION_META_KIND};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: i64,
    pub name: String,
    /// Machine name, e.g. `cash` or `card`.
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodsList {
    pub data: Vec<PaymentMethod>,
    pub meta: Option<PaginationMeta>,
}

impl PaymentMethodsList {
    pub fn find(&self, id: i64) -> Option<&PaymentMethod> {
        self.data.iter().find(|m| m.id == id)
    }
}

pub(crate) static PAYMENT_METHOD: Descriptor = Descriptor {
    name: "PaymentMethod",
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
static PAYMENT_METHOD_KIND: FieldKind = FieldKind::Entity(&PAYMENT_METHOD);

pub(crate) static PAYMENT_METHODS_LIST: Descriptor = Descriptor {
    name: "PaymentMethodsList",
    fields: &[
        Field {
            name: "data",
            kind: FieldKind::List(&PAYMENT_METHOD_KIND),
        },
        Field {
            name: "meta",
            kind: FieldKind::Nullable(&PAGINATION_META_KIND),
        },
    ],
};

entity!(PaymentMethod => PAYMENT_METHOD);
entity!(PaymentMethodsList => PAYMENT_METHODS_LIST);
