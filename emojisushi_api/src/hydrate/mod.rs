//! Descriptor-driven conversion between raw JSON and typed entities.
//!
//! Each entity publishes a static [`Descriptor`]. The [`Hydrator`] walks it
//! against a decoded `serde_json::Value`, producing a normalized value where
//! every declared field is present with its declared JSON type. Serde then
//! turns the normalized value into the Rust type. Undeclared keys are dropped.

mod coerce;
mod descriptor;

use std::collections::HashMap;

use serde_json::{Map, Value};

pub use self::descriptor::{Descriptor, Entity, Field, FieldKind};

/// Errors raised while mapping raw JSON onto an entity.
#[derive(thiserror::Error, Debug)]
pub enum HydrationError {
    /// The target type was never registered with the hydrator.
    #[error("unknown hydration target `{0}`")]
    UnknownType(String),
    /// A structural field (object or list) had the wrong JSON shape.
    #[error("malformed payload at {path}: expected {expected}, found {found}")]
    Malformed {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
    /// The normalized value did not fit the Rust type of the entity.
    #[error("{type_name} does not match its descriptor: {source}")]
    Mismatch {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Maps raw JSON onto registered entity types and back.
///
/// Holds only an immutable registry, so every call yields a fresh instance.
#[derive(Clone, Debug)]
pub struct Hydrator {
    registry: HashMap<&'static str, &'static Descriptor>,
}

impl Default for Hydrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Hydrator {
    /// Creates a hydrator that knows every entity in [`crate::types`].
    pub fn new() -> Self {
        let mut hydrator = Self::empty();
        for descriptor in crate::types::DESCRIPTORS {
            hydrator.register(descriptor);
        }
        hydrator
    }

    /// Creates a hydrator with no registered types.
    pub fn empty() -> Self {
        Self {
            registry: HashMap::new(),
        }
    }

    pub fn register(&mut self, descriptor: &'static Descriptor) {
        self.registry.insert(descriptor.name, descriptor);
    }

    pub fn is_registered(&self, type_name: &str) -> bool {
        self.registry.contains_key(type_name)
    }

    fn lookup(&self, type_name: &str) -> Result<&'static Descriptor, HydrationError> {
        self.registry
            .get(type_name)
            .copied()
            .ok_or_else(|| HydrationError::UnknownType(type_name.to_string()))
    }

    /// Builds a `T` from a raw decoded JSON object.
    pub fn hydrate<T: Entity>(&self, raw: &Value) -> Result<T, HydrationError> {
        let normalized = self.hydrate_named(T::descriptor().name, raw)?;
        serde_json::from_value(normalized).map_err(|source| HydrationError::Mismatch {
            type_name: T::descriptor().name,
            source,
        })
    }

    /// Normalizes `raw` against the registered descriptor called `type_name`.
    pub fn hydrate_named(&self, type_name: &str, raw: &Value) -> Result<Value, HydrationError> {
        let descriptor = self.lookup(type_name)?;
        hydrate_entity(descriptor, raw, "$")
    }

    /// Turns a typed entity back into plain nested JSON holding only its declared fields.
    pub fn extract<T: Entity>(&self, instance: &T) -> Result<Value, HydrationError> {
        let descriptor = self.lookup(T::descriptor().name)?;
        let value = serde_json::to_value(instance).map_err(|source| HydrationError::Mismatch {
            type_name: descriptor.name,
            source,
        })?;
        Ok(extract_entity(descriptor, &value))
    }

    /// Untyped counterpart of [`Hydrator::extract`].
    pub fn extract_named(&self, type_name: &str, value: &Value) -> Result<Value, HydrationError> {
        let descriptor = self.lookup(type_name)?;
        Ok(extract_entity(descriptor, value))
    }
}

fn hydrate_entity(
    descriptor: &'static Descriptor,
    raw: &Value,
    path: &str,
) -> Result<Value, HydrationError> {
    let empty = Map::new();
    let object = match raw {
        Value::Object(object) => object,
        // PHP backends encode an empty object as `[]`.
        Value::Array(items) if items.is_empty() => &empty,
        other => return Err(malformed(path, "object", other)),
    };
    let mut out = Map::with_capacity(descriptor.fields.len());
    for field in descriptor.fields {
        let field_path = format!("{}.{}", path, field.name);
        let value = hydrate_field(&field.kind, object.get(field.name), &field_path)?;
        out.insert(field.name.to_string(), value);
    }
    Ok(Value::Object(out))
}

fn hydrate_field(
    kind: &'static FieldKind,
    raw: Option<&Value>,
    path: &str,
) -> Result<Value, HydrationError> {
    let raw = raw.filter(|v| !v.is_null());
    match kind {
        FieldKind::Nullable(inner) => match raw {
            None => Ok(Value::Null),
            Some(value) => hydrate_field(inner, Some(value), path),
        },
        FieldKind::Entity(descriptor) => match raw {
            None => hydrate_entity(descriptor, &Value::Object(Map::new()), path),
            Some(value) => hydrate_entity(descriptor, value, path),
        },
        FieldKind::List(element) => match raw {
            None => Ok(Value::Array(Vec::new())),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| hydrate_field(element, Some(item), &format!("{}[{}]", path, i)))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            Some(other) => Err(malformed(path, "array", other)),
        },
        FieldKind::Json => Ok(raw.cloned().unwrap_or(Value::Null)),
        primitive => Ok(match raw {
            None => primitive.primitive_default(),
            Some(value) => coerce::coerce(primitive, value).unwrap_or_else(|| {
                tracing::trace!(
                    "Defaulting {} at {}: got {}",
                    primitive.label(),
                    path,
                    json_kind(value)
                );
                primitive.primitive_default()
            }),
        }),
    }
}

fn extract_entity(descriptor: &'static Descriptor, value: &Value) -> Value {
    let mut out = Map::new();
    if let Value::Object(object) = value {
        for field in descriptor.fields {
            if let Some(field_value) = object.get(field.name) {
                out.insert(field.name.to_string(), extract_field(&field.kind, field_value));
            }
        }
    }
    Value::Object(out)
}

fn extract_field(kind: &'static FieldKind, value: &Value) -> Value {
    match (kind, value) {
        (_, Value::Null) => Value::Null,
        (FieldKind::Nullable(inner), value) => extract_field(inner, value),
        (FieldKind::Entity(descriptor), value) => extract_entity(descriptor, value),
        (FieldKind::List(element), Value::Array(items)) => Value::Array(
            items
                .iter()
                .map(|item| extract_field(element, item))
                .collect(),
        ),
        (_, value) => value.clone(),
    }
}

fn malformed(path: &str, expected: &'static str, found: &Value) -> HydrationError {
    HydrationError::Malformed {
        path: path.to_string(),
        expected,
        found: json_kind(found),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Dish {
        id: i64,
        name: String,
        spicy: bool,
        weight: f64,
        note: Option<String>,
    }

    static DISH: Descriptor = Descriptor {
        name: "Dish",
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
                name: "spicy",
                kind: FieldKind::Bool,
            },
            Field {
                name: "weight",
                kind: FieldKind::Float,
            },
            Field {
                name: "note",
                kind: FieldKind::Nullable(&FieldKind::Str),
            },
        ],
    };
    static DISH_KIND: FieldKind = FieldKind::Entity(&DISH);

    impl Entity for Dish {
        fn descriptor() -> &'static Descriptor {
            &DISH
        }
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Set {
        title: String,
        main: Dish,
        sides: Vec<Dish>,
        tags: Vec<String>,
        extra: Option<Dish>,
        options: Value,
    }

    static SET: Descriptor = Descriptor {
        name: "Set",
        fields: &[
            Field {
                name: "title",
                kind: FieldKind::Str,
            },
            Field {
                name: "main",
                kind: FieldKind::Entity(&DISH),
            },
            Field {
                name: "sides",
                kind: FieldKind::List(&DISH_KIND),
            },
            Field {
                name: "tags",
                kind: FieldKind::List(&FieldKind::Str),
            },
            Field {
                name: "extra",
                kind: FieldKind::Nullable(&DISH_KIND),
            },
            Field {
                name: "options",
                kind: FieldKind::Json,
            },
        ],
    };

    impl Entity for Set {
        fn descriptor() -> &'static Descriptor {
            &SET
        }
    }

    fn hydrator() -> Hydrator {
        let mut h = Hydrator::empty();
        h.register(&DISH);
        h.register(&SET);
        h
    }

    #[test]
    fn missing_primitives_take_defaults() {
        let dish: Dish = hydrator().hydrate(&json!({"id": 5})).unwrap();
        assert_eq!(dish.id, 5);
        assert_eq!(dish.name, "");
        assert!(!dish.spicy);
        assert_eq!(dish.weight, 0.0);
        assert_eq!(dish.note, None);
    }

    #[test]
    fn primitives_are_coerced() {
        let dish: Dish = hydrator()
            .hydrate(&json!({"id": "12", "name": 7, "spicy": 1, "weight": "250.5", "note": "hot"}))
            .unwrap();
        assert_eq!(dish.id, 12);
        assert_eq!(dish.name, "7");
        assert!(dish.spicy);
        assert_eq!(dish.weight, 250.5);
        assert_eq!(dish.note.as_deref(), Some("hot"));
    }

    #[test]
    fn uncoercible_primitives_default() {
        let dish: Dish = hydrator()
            .hydrate(&json!({"id": {"nested": true}, "name": ["a"], "spicy": "maybe"}))
            .unwrap();
        assert_eq!(dish.id, 0);
        assert_eq!(dish.name, "");
        assert!(!dish.spicy);
    }

    #[test]
    fn undeclared_keys_are_ignored() {
        let value = hydrator()
            .hydrate_named("Dish", &json!({"id": 1, "calories": 900}))
            .unwrap();
        assert!(value.get("calories").is_none());
        assert_eq!(value["id"], 1);
    }

    #[test]
    fn nested_entities_and_lists_hydrate() {
        let raw = json!({
            "title": "Lunch",
            "main": {"id": 1, "name": "Ramen"},
            "sides": [{"id": 2, "name": "Edamame"}, {"id": 3}],
            "tags": ["hot", 4],
            "extra": {"id": 9}
        });
        let set: Set = hydrator().hydrate(&raw).unwrap();
        assert_eq!(set.main.name, "Ramen");
        assert_eq!(set.sides.len(), 2);
        assert_eq!(set.sides[1].id, 3);
        assert_eq!(set.sides[1].name, "");
        assert_eq!(set.tags, vec!["hot".to_string(), "4".to_string()]);
        assert_eq!(set.extra.map(|d| d.id), Some(9));
    }

    #[test]
    fn absent_lists_are_empty_and_absent_nullables_are_none() {
        let set: Set = hydrator().hydrate(&json!({"title": "Bare"})).unwrap();
        assert!(set.sides.is_empty());
        assert!(set.tags.is_empty());
        assert!(set.extra.is_none());
        assert_eq!(set.main.id, 0);
    }

    #[test]
    fn null_list_is_empty() {
        let set: Set = hydrator().hydrate(&json!({"sides": null})).unwrap();
        assert!(set.sides.is_empty());
    }

    #[test]
    fn list_that_is_not_an_array_is_malformed() {
        let err = hydrator()
            .hydrate::<Set>(&json!({"sides": "ramen"}))
            .unwrap_err();
        match err {
            HydrationError::Malformed { path, expected, found } => {
                assert_eq!(path, "$.sides");
                assert_eq!(expected, "array");
                assert_eq!(found, "string");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_path_points_into_lists() {
        let err = hydrator()
            .hydrate::<Set>(&json!({"sides": [{"id": 1}, 42]}))
            .unwrap_err();
        assert!(err.to_string().contains("$.sides[1]"));
    }

    #[test]
    fn empty_array_stands_in_for_an_empty_object() {
        let set: Set = hydrator()
            .hydrate(&json!({"title": "Bento", "main": [], "extra": []}))
            .unwrap();
        assert_eq!(set.main.id, 0);
        assert_eq!(set.extra.map(|d| d.name), Some(String::new()));
    }

    #[test]
    fn top_level_must_be_an_object() {
        let err = hydrator().hydrate::<Dish>(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, HydrationError::Malformed { ref path, .. } if path == "$"));
    }

    #[test]
    fn json_fields_pass_through_untouched() {
        let raw = json!({"options": {"wasabi": [1, "extra"], "sauce": null}});
        let set: Set = hydrator().hydrate(&raw).unwrap();
        assert_eq!(set.options, raw["options"]);

        let bare: Set = hydrator().hydrate(&json!({})).unwrap();
        assert_eq!(bare.options, Value::Null);
    }

    #[test]
    fn registry_lists_registered_types() {
        let h = hydrator();
        assert!(h.is_registered("Dish"));
        assert!(h.is_registered("Set"));
        assert!(!h.is_registered("Product"));
        assert!(Hydrator::new().is_registered("Product"));
    }

    #[test]
    fn unregistered_target_is_an_error() {
        let err = Hydrator::empty().hydrate::<Dish>(&json!({"id": 1})).unwrap_err();
        assert!(matches!(err, HydrationError::UnknownType(ref name) if name == "Dish"));
        assert!(hydrator().hydrate_named("Nope", &json!({})).is_err());
    }

    #[test]
    fn hydrations_are_independent_values() {
        let h = hydrator();
        let raw = json!({"id": 3, "name": "Gyoza"});
        let a: Dish = h.hydrate(&raw).unwrap();
        let b: Dish = h.hydrate(&raw).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn extract_walks_declared_fields() {
        let h = hydrator();
        let raw = json!({
            "title": "Dinner",
            "main": {"id": 1, "name": "Sushi", "spicy": false, "weight": 300.0, "note": null},
            "sides": [{"id": 2, "name": "Miso", "spicy": true, "weight": 150.0, "note": "warm"}],
            "tags": ["fish"],
            "extra": null,
            "options": {"ginger": true}
        });
        let set: Set = h.hydrate(&raw).unwrap();
        assert_eq!(h.extract(&set).unwrap(), raw);
    }

    #[test]
    fn extract_drops_undeclared_keys() {
        let value = hydrator()
            .extract_named("Dish", &json!({"id": 1, "secret": "x"}))
            .unwrap();
        assert_eq!(value, json!({"id": 1}));
    }
}
