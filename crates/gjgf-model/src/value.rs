// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Helpers over attribute values shared by the adapters.

use serde_json::Value;

/// Render a native node identifier as a canonical [`NodeId`](crate::NodeId).
///
/// Strings are used verbatim. Booleans and null render the way the
/// dict-based graph libraries print their keys (`"True"`, `"False"`,
/// `"None"`); everything else uses its JSON text, so `7` becomes `"7"` and
/// `1.5` becomes `"1.5"`.
pub fn stringify_id(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Bool(true) => "True".to_owned(),
        Value::Bool(false) => "False".to_owned(),
        Value::Null => "None".to_owned(),
        other => other.to_string(),
    }
}

/// True for string, number and bool values (bool counts as an integer).
pub fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

/// True for the values a zero-initialized property store reports for an
/// unset slot: `0`, `0.0`, `""` and `false`.
pub fn is_unset_sentinel(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Bool(b) => !b,
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Coerce a reserved string field (`label`, `type`, `relation`).
pub fn promote_string(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

/// JSON truthiness, used to promote a non-bool `directed` value.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
