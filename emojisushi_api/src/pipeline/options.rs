//! Per-call transport options and the rules for merging them with an
//! operation's own parameters.

use std::time::Duration;

use serde_json::{Map, Value};

/// Caller-supplied overrides for a single request.
///
/// Headers overwrite by name (case-insensitive). `query` and `json` are
/// merged with the operation's parameters by [`merge_params`].
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
    query: Map<String, Value>,
    json: Map<String, Value>,
    timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_query(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.query.insert(key.to_string(), value.into());
        self
    }

    pub fn with_json(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.json.insert(key.to_string(), value.into());
        self
    }

    /// Sets a timeout for the whole request. No timeout is applied otherwise.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn query(&self) -> &Map<String, Value> {
        &self.query
    }

    pub fn json(&self) -> &Map<String, Value> {
        &self.json
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Merges an operation's parameters over the caller's overrides.
///
/// Objects merge key by key, recursively. When both sides hold an array the
/// two are concatenated, caller entries first. Any other collision is won by
/// the operation's value.
pub fn merge_params(
    caller: &Map<String, Value>,
    operation: &Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = caller.clone();
    for (key, value) in operation {
        let next = match merged.remove(key) {
            Some(existing) => merge_value(existing, value.clone()),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    merged
}

fn merge_value(existing: Value, incoming: Value) -> Value {
    match (existing, incoming) {
        (Value::Object(a), Value::Object(b)) => Value::Object(merge_params(&a, &b)),
        (Value::Array(mut a), Value::Array(b)) => {
            a.extend(b);
            Value::Array(a)
        }
        (_, incoming) => incoming,
    }
}

/// Flattens parameters into query pairs.
///
/// Booleans are sent as `1`/`0`, `null` is skipped, arrays repeat `key[]` and
/// nested objects become `key[sub]`.
pub(crate) fn encode_query(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        push_pairs(key.clone(), value, &mut pairs);
    }
    pairs
}

fn push_pairs(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, if *b { "1" } else { "0" }.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Array(items) => {
            for item in items {
                push_pairs(format!("{}[]", key), item, pairs);
            }
        }
        Value::Object(map) => {
            for (sub, item) in map {
                push_pairs(format!("{}[{}]", key, sub), item, pairs);
            }
        }
    }
}
