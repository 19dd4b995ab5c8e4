use serde::{Deserialize, Serialize};

use crate::hydrate::{Descriptor, Field, FieldKind};

use super::meta::{PaginationMeta, PAGINATION_META_KIND};

/// A menu category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesList {
    pub data: Vec<Category>,
    pub meta: Option<PaginationMeta>,
}

impl CategoriesList {
    /// First category with the given id, in list order.
    pub fn find(&self, id: i64) -> Option<&Category> {
        self.data.iter().find(|c| c.id == id)
    }
}

pub(crate) static CATEGORY: Descriptor = Descriptor {
    name: "Category",
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
    ],
};
pub(crate) static CATEGORY_KIND: FieldKind = FieldKind::Entity(&CATEGORY);

pub(crate) static CATEGORIES_LIST: Descriptor = Descriptor {
    name: "CategoriesList",
    fields: &[
        Field {
            name: "data",
            kind: FieldKind::List(&CATEGORY_KIND),
        },
        Field {
            name: "meta",
            kind: FieldKind::Nullable(&PAGINATION_META_KIND),
        },
    ],
};

entity!(Category => CATEGORY);
entity!(CategoriesList => CATEGORIES_LIST);
