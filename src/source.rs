//! Entry lists from serialized data.
//!
//! JSON arrays are read as flat entry lists; TOML tables are read as
//! default lists in key order. Only scalars are accepted.

use crate::value::Value;

/// Errors converting serialized data into entry lists.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("expected a flat array of scalars, got {0}")]
    NotAnArray(&'static str),

    #[error("unsupported value at '{at}': {found}")]
    UnsupportedValue { at: String, found: &'static str },
}

/// Convert a flat JSON array into an entry list.
///
/// Integers that fit in 32 bits become `Int`, larger ones `Long`; floats
/// become `Double`. Integers beyond `i64` are rejected, never rounded.
pub fn entries_from_json(json: &serde_json::Value) -> Result<Vec<Value>, SourceError> {
    let items = json
        .as_array()
        .ok_or_else(|| SourceError::NotAnArray(json_type_name(json)))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| json_scalar(item, &i.to_string()))
        .collect()
}

/// Parse a JSON document holding a flat array into an entry list.
pub fn entries_from_json_str(s: &str) -> Result<Vec<Value>, SourceError> {
    let json: serde_json::Value = serde_json::from_str(s)
        .map_err(|e| SourceError::Parse(format!("JSON parse error: {}", e)))?;
    entries_from_json(&json)
}

/// Parse a flat TOML table into a default list.
///
/// Keys come out in sorted order, which does not affect the built map.
pub fn defaults_from_toml(s: &str) -> Result<Vec<Value>, SourceError> {
    let table: toml::Table = toml::from_str(s)
        .map_err(|e| SourceError::Parse(format!("TOML parse error: {}", e)))?;

    let mut entries = Vec::with_capacity(table.len() * 2);
    for (key, value) in table {
        let value = toml_scalar(&value, &key)?;
        entries.push(Value::Str(key));
        entries.push(value);
    }
    Ok(entries)
}

fn json_scalar(item: &serde_json::Value, at: &str) -> Result<Value, SourceError> {
    match item {
        serde_json::Value::String(s) => Ok(Value::Str(s.clone())),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(integer(i))
            } else if n.is_f64() {
                n.as_f64()
                    .map(Value::Double)
                    .ok_or_else(|| unsupported(at, "number"))
            } else {
                Err(unsupported(at, "out-of-range integer"))
            }
        }
        other => Err(unsupported(at, json_type_name(other))),
    }
}

fn toml_scalar(value: &toml::Value, at: &str) -> Result<Value, SourceError> {
    match value {
        toml::Value::String(s) => Ok(Value::Str(s.clone())),
        toml::Value::Integer(i) => Ok(integer(*i)),
        toml::Value::Float(f) => Ok(Value::Double(*f)),
        toml::Value::Boolean(b) => Ok(Value::Bool(*b)),
        toml::Value::Datetime(_) => Err(unsupported(at, "datetime")),
        toml::Value::Array(_) => Err(unsupported(at, "array")),
        toml::Value::Table(_) => Err(unsupported(at, "table")),
    }
}

fn integer(i: i64) -> Value {
    match i32::try_from(i) {
        Ok(small) => Value::Int(small),
        Err(_) => Value::Long(i),
    }
}

fn unsupported(at: &str, found: &'static str) -> SourceError {
    SourceError::UnsupportedValue {
        at: at.to_string(),
        found,
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_array_to_entries() {
        let json = json!(["num", 6, "big", 5_000_000_000i64, "r", 0.5, "ok", true]);
        let entries = entries_from_json(&json).unwrap();
        assert_eq!(
            entries,
            vec![
                Value::from("num"),
                Value::Int(6),
                Value::from("big"),
                Value::Long(5_000_000_000),
                Value::from("r"),
                Value::Double(0.5),
                Value::from("ok"),
                Value::Bool(true),
            ]
        );
    }

    #[test]
    fn test_json_rejects_nested_and_null() {
        let err = entries_from_json(&json!(["a", [1, 2]])).unwrap_err();
        assert!(matches!(
            err,
            SourceError::UnsupportedValue { ref at, found: "array" } if at == "1"
        ));

        let err = entries_from_json(&json!(["a", null])).unwrap_err();
        assert!(matches!(err, SourceError::UnsupportedValue { found: "null", .. }));
    }

    #[test]
    fn test_json_integer_beyond_i64_rejected() {
        let err = entries_from_json_str(r#"["big", 18446744073709551615]"#).unwrap_err();
        assert!(matches!(
            err,
            SourceError::UnsupportedValue { ref at, found: "out-of-range integer" } if at == "1"
        ));
    }

    #[test]
    fn test_json_integer_at_i64_max_is_long() {
        let entries = entries_from_json_str(r#"["big", 9223372036854775807]"#).unwrap();
        assert_eq!(entries[1], Value::Long(i64::MAX));
    }

    #[test]
    fn test_json_requires_array() {
        let err = entries_from_json(&json!({"a": 1})).unwrap_err();
        assert!(matches!(err, SourceError::NotAnArray("object")));
    }

    #[test]
    fn test_json_str_parse_error() {
        let err = entries_from_json_str("[\"a\", ").unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }

    #[test]
    fn test_toml_table_to_defaults() {
        let entries = defaults_from_toml("max = 7\nmin = 2\n").unwrap();
        assert_eq!(
            entries,
            vec![Value::from("max"), Value::Int(7), Value::from("min"), Value::Int(2)]
        );
    }

    #[test]
    fn test_toml_rejects_nested_table() {
        let err = defaults_from_toml("[cache]\nmode = \"on\"\n").unwrap_err();
        assert!(matches!(
            err,
            SourceError::UnsupportedValue { ref at, found: "table" } if at == "cache"
        ));
    }

    #[test]
    fn test_toml_parse_error() {
        let err = defaults_from_toml("max = ").unwrap_err();
        assert!(err.to_string().starts_with("Parse error: TOML parse error"));
    }
}
