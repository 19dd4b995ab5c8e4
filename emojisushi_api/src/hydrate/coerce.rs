//! Primitive coercion for hydrated fields.

use serde_json::{Number, Value};

use super::FieldKind;

/// Coerces `value` to the primitive `kind`. `None` means the value did not
/// fit and the caller should fall back to the kind's default.
pub(super) fn coerce(kind: &FieldKind, value: &Value) -> Option<Value> {
    match kind {
        FieldKind::Str => to_str(value).map(Value::String),
        FieldKind::Int => to_int(value).map(Value::from),
        FieldKind::Float => to_float(value)
            .and_then(Number::from_f64)
            .map(Value::Number),
        FieldKind::Bool => to_bool(value).map(Value::Bool),
        _ => None,
    }
}

fn to_str(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole))
        }
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

fn whole(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim() {
            "1" | "true" => Some(true),
            "0" | "false" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ints_accept_whole_floats_and_numeric_strings() {
        assert_eq!(coerce(&FieldKind::Int, &json!(4.0)), Some(json!(4)));
        assert_eq!(coerce(&FieldKind::Int, &json!(" 42 ")), Some(json!(42)));
        assert_eq!(coerce(&FieldKind::Int, &json!("3.0")), Some(json!(3)));
        assert_eq!(coerce(&FieldKind::Int, &json!(true)), Some(json!(1)));
    }

    #[test]
    fn ints_reject_fractions_and_words() {
        assert_eq!(coerce(&FieldKind::Int, &json!(4.5)), None);
        assert_eq!(coerce(&FieldKind::Int, &json!("four")), None);
        assert_eq!(coerce(&FieldKind::Int, &json!([4])), None);
    }

    #[test]
    fn floats_accept_ints_and_strings() {
        assert_eq!(coerce(&FieldKind::Float, &json!(3)), Some(json!(3.0)));
        assert_eq!(coerce(&FieldKind::Float, &json!("199.90")), Some(json!(199.9)));
        assert_eq!(coerce(&FieldKind::Float, &json!("NaN")), None);
    }

    #[test]
    fn strings_stringify_scalars_only() {
        assert_eq!(coerce(&FieldKind::Str, &json!(15)), Some(json!("15")));
        assert_eq!(coerce(&FieldKind::Str, &json!(false)), Some(json!("false")));
        assert_eq!(coerce(&FieldKind::Str, &json!({"a": 1})), None);
    }

    #[test]
    fn bools_understand_common_encodings() {
        assert_eq!(coerce(&FieldKind::Bool, &json!(0)), Some(json!(false)));
        assert_eq!(coerce(&FieldKind::Bool, &json!(2)), Some(json!(true)));
        assert_eq!(coerce(&FieldKind::Bool, &json!("1")), Some(json!(true)));
        assert_eq!(coerce(&FieldKind::Bool, &json!("")), Some(json!(false)));
        assert_eq!(coerce(&FieldKind::Bool, &json!("yes")), None);
    }
}
