use serde::{Deserialize, Serialize};

use crate::hydrate::{Descriptor, Field, FieldKind};

/// Confirmation returned by `order/place`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOrderResponse {
    pub success: bool,
    pub message: Option<String>,
    pub order_id: Option<i64>,
}

pub(crate) static PLACE_ORDER_RESPONSE: Descriptor = Descriptor {
    name: "PlaceOrderResponse",
    fields: &[
        Field {
            name: "success",
            kind: FieldKind::Bool,
        },
        Field {
            name: "message",
            kind: FieldKind::Nullable(&FieldKind::Str),
        },
        Field {
            name: "order_id",
            kind: FieldKind::Nullable(&FieldKind::Int),
        },
    ],
};

entity!(PlaceOrderResponse => PLACE_ORDER_RESPONSE);
