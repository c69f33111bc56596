use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a field the backend serves either as a bare number or a string.
pub fn deserialize_num_str<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Either<'a> {
        Str(Cow<'a, str>),
        Num(i64),
    }
    Ok(match Either::deserialize(deserializer)? {
        Either::Str(s) => s.into_owned(),
        Either::Num(n) => n.to_string(),
    })
}

/// Truthiness of a loosely typed wire field, with the semantics the web
/// client itself applies: `null`, `false`, `0` and `""` are falsy,
/// everything else is truthy.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
