use serde::{Deserialize, Serialize};

use crate::hydrate::{Descriptor, Field, FieldKind};

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Total number of records available on the server.
    pub total: i64,
    pub offset: i64,
    pub limit: i64,
}

pub(crate) static PAGINATION_META: Descriptor = Descriptor {
    name: "PaginationMeta",
    fields: &[
        Field {
            name: "total",
            kind: FieldKind::Int,
        },
        Field {
            name: "offset",
            kind: FieldKind::Int,
        },
        Field {
            name: "limit",
            kind: FieldKind::Int,
        },
    ],
};
pub(crate) static PAGINATION_META_KIND: FieldKind = FieldKind::Entity(&PAGINATION_META);

entity!(PaginationMeta => PAGINATION_META);
