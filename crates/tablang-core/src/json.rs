//! Conversions between [`Document`] and JSON.
//!
//! Rendering goes through `serde` (see the `Serialize` impls on the value
//! model); key order follows insertion order. Reading JSON back accepts only
//! what tablang can hold: an object root, non-negative integers, strings,
//! arrays of strings, and nested objects.

use crate::error::{Result, TablangError};
use crate::types::{Document, Table, Value};
use serde_json::{Map, Value as Json};

impl Document {
    /// Compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// JSON indented by two spaces.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The document as a `serde_json::Value` tree.
    pub fn to_json_value(&self) -> Result<Json> {
        Ok(serde_json::to_value(self)?)
    }
}

impl TryFrom<&Json> for Document {
    type Error = TablangError;

    fn try_from(json: &Json) -> Result<Self> {
        match json {
            Json::Object(map) => Ok(Document::from(table_from_json(map, "")?)),
            other => Err(TablangError::Emit(format!(
                "document root must be a JSON object, found {}",
                kind(other)
            ))),
        }
    }
}

fn table_from_json(map: &Map<String, Json>, path: &str) -> Result<Table> {
    let mut table = Table::new();
    for (key, value) in map {
        let path = if path.is_empty() {
            key.clone()
        } else {
            format!("{path}.{key}")
        };
        table.insert(key.clone(), value_from_json(value, &path)?);
    }
    Ok(table)
}

fn value_from_json(json: &Json, path: &str) -> Result<Value> {
    match json {
        Json::Number(n) => n.as_i64().filter(|n| *n >= 0).map(Value::Integer).ok_or_else(|| {
            TablangError::Emit(format!(
                "`{path}`: only non-negative integers that fit in i64 are supported, found {n}"
            ))
        }),
        Json::String(s) => Ok(Value::String(s.clone())),
        Json::Array(items) => items
            .iter()
            .map(|item| match item {
                Json::String(s) => Ok(s.clone()),
                other => Err(TablangError::Emit(format!(
                    "`{path}`: array elements must be strings, found {}",
                    kind(other)
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Json::Object(map) => table_from_json(map, path).map(Value::Table),
        other => Err(TablangError::Emit(format!(
            "`{path}`: unsupported JSON value {}",
            kind(other)
        ))),
    }
}

fn kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
