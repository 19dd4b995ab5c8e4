//! Static field-descriptor tables consulted by the [`Hydrator`](super::Hydrator).

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Declared type of a single entity field.
pub enum FieldKind {
    Str,
    Int,
    Float,
    Bool,
    /// Free-form JSON, copied through untouched.
    Json,
    /// A nested entity, hydrated recursively.
    Entity(&'static Descriptor),
    /// An ordered sequence; absent input becomes an empty list.
    List(&'static FieldKind),
    /// Absent or `null` input stays `null` instead of defaulting.
    Nullable(&'static FieldKind),
}

impl FieldKind {
    /// Default for a primitive or container kind. Entities have no value-level
    /// default here; the hydrator builds one from an empty object.
    pub(crate) fn primitive_default(&self) -> Value {
        match self {
            FieldKind::Str => Value::String(String::new()),
            FieldKind::Int => Value::from(0i64),
            FieldKind::Float => Value::from(0.0f64),
            FieldKind::Bool => Value::Bool(false),
            FieldKind::List(_) => Value::Array(Vec::new()),
            FieldKind::Json | FieldKind::Nullable(_) | FieldKind::Entity(_) => Value::Null,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            FieldKind::Str => "string",
            FieldKind::Int => "integer",
            FieldKind::Float => "float",
            FieldKind::Bool => "boolean",
            FieldKind::Json => "json",
            FieldKind::Entity(_) => "object",
            FieldKind::List(_) => "array",
            FieldKind::Nullable(inner) => inner.label(),
        }
    }
}

// Entity kinds print by name so self-referencing tables stay printable.
impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Entity(d) => write!(f, "Entity({})", d.name),
            FieldKind::List(inner) => write!(f, "List({:?})", inner),
            FieldKind::Nullable(inner) => write!(f, "Nullable({:?})", inner),
            other => f.write_str(other.label()),
        }
    }
}

#[derive(Debug)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Field names and declared kinds for one response type.
#[derive(Debug)]
pub struct Descriptor {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Descriptor {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A typed record that can be hydrated from raw JSON.
///
/// The serde field names of the implementing type must match the names in
/// its [`Entity::descriptor`].
pub trait Entity: Serialize + DeserializeOwned {
    fn descriptor() -> &'static Descriptor;
}
