//! Emitter: [`Document`] → tablang text.
//!
//! Output layout:
//!
//! - scalars and arrays become constant lines, `key: value`
//! - the `table` key (when it holds a table) becomes a multi-line block, one
//!   `key=value,` pair per line
//! - any other table becomes an inline `key: table([a=1, b=2])` constant
//!
//! tablang has no quoting or escaping, so plenty of values have no faithful
//! spelling (a string of digits would read back as an integer, a comma inside a
//! table splits the pair, ...). Rather than write text that parses back to
//! something else, the emitter refuses with [`TablangError::Emit`].
//!
//! # Example
//! ```
//! use tablang_core::{emit_json, parse_str, Value};
//!
//! let text = emit_json(r#"{"name":"John","fruits":["apple","pear"],"table":{"k":1}}"#).unwrap();
//! assert_eq!(text, "name: John\nfruits: {apple.pear}\ntable([\n  k=1,\n])\n");
//!
//! let doc = parse_str(&text).unwrap();
//! assert_eq!(doc.get("name"), Some(&Value::String("John".into())));
//! ```

use crate::error::{Result, TablangError};
use crate::scanner::TABLE_KEY;
use crate::table::{TABLE_CLOSE, TABLE_OPEN};
use crate::types::{Document, Table, Value};

/// Where a value is being written; table pairs are split on `,`, constants are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Constant,
    Pair,
}

/// Write `doc` as tablang text, one entry per line, in insertion order.
pub fn emit(doc: &Document) -> Result<String> {
    let mut out = String::new();
    for (key, value) in doc {
        match value {
            Value::Table(table) if key == TABLE_KEY => emit_block(table, &mut out)?,
            _ => emit_constant(key, value, &mut out)?,
        }
    }
    Ok(out)
}

/// Convert a JSON document straight to tablang text.
pub fn emit_json(json: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    emit(&Document::try_from(&value)?)
}

fn emit_constant(key: &str, value: &Value, out: &mut String) -> Result<()> {
    check_constant_key(key)?;
    let text = value_text(value, Slot::Constant, key)?;
    out.push_str(key);
    out.push(':');
    if !text.is_empty() {
        out.push(' ');
        out.push_str(&text);
    }
    out.push('\n');
    Ok(())
}

fn emit_block(table: &Table, out: &mut String) -> Result<()> {
    out.push_str(TABLE_OPEN);
    out.push('\n');
    for (key, value) in table {
        let path = format!("{TABLE_KEY}.{key}");
        check_pair_key(key, &path)?;
        out.push_str("  ");
        out.push_str(key);
        out.push('=');
        out.push_str(&value_text(value, Slot::Pair, &path)?);
        out.push_str(",\n");
    }
    out.push_str(TABLE_CLOSE);
    out.push('\n');
    Ok(())
}

fn value_text(value: &Value, slot: Slot, path: &str) -> Result<String> {
    match value {
        Value::Integer(n) if *n < 0 => Err(unrepresentable(
            path,
            "negative integers read back as strings",
        )),
        Value::Integer(n) => Ok(n.to_string()),
        Value::String(s) => {
            check_string(s, slot, path)?;
            Ok(s.clone())
        }
        Value::Array(items) => {
            for item in items {
                check_array_item(item, slot, path)?;
            }
            Ok(format!("{{{}}}", items.join(".")))
        }
        Value::Table(table) => inline_table(table, slot, path),
    }
}

fn inline_table(table: &Table, slot: Slot, path: &str) -> Result<String> {
    if slot == Slot::Pair && table.len() > 1 {
        return Err(unrepresentable(
            path,
            "a table nested in a table can hold at most one pair",
        ));
    }
    let mut pairs = Vec::with_capacity(table.len());
    for (key, value) in table {
        let path = format!("{path}.{key}");
        check_pair_key(key, &path)?;
        pairs.push(format!("{key}={}", value_text(value, Slot::Pair, &path)?));
    }
    Ok(format!("{TABLE_OPEN}{}{TABLE_CLOSE}", pairs.join(", ")))
}

fn check_constant_key(key: &str) -> Result<()> {
    check_bare(key, key)?;
    if key.contains(':') {
        return Err(unrepresentable(key, "constant keys cannot contain `:`"));
    }
    if key.starts_with(TABLE_OPEN) {
        return Err(unrepresentable(key, "constant keys cannot start with `table([`"));
    }
    Ok(())
}

fn check_pair_key(key: &str, path: &str) -> Result<()> {
    check_bare(key, path)?;
    if key.contains('=') || key.contains(',') {
        return Err(unrepresentable(path, "table keys cannot contain `=` or `,`"));
    }
    Ok(())
}

fn check_string(s: &str, slot: Slot, path: &str) -> Result<()> {
    check_bare(s, path)?;
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unrepresentable(path, "digit-only strings read back as integers"));
    }
    if s.starts_with('{') && s.ends_with('}') {
        return Err(unrepresentable(path, "string looks like an array literal"));
    }
    if s.starts_with(TABLE_OPEN) && s.ends_with(TABLE_CLOSE) {
        return Err(unrepresentable(path, "string looks like a table literal"));
    }
    if slot == Slot::Pair && s.contains(',') {
        return Err(unrepresentable(path, "table values cannot contain `,`"));
    }
    Ok(())
}

fn check_array_item(item: &str, slot: Slot, path: &str) -> Result<()> {
    check_bare(item, path)?;
    if item.is_empty() || item.contains('.') {
        return Err(unrepresentable(path, "array elements must be non-empty and free of `.`"));
    }
    if slot == Slot::Pair && item.contains(',') {
        return Err(unrepresentable(path, "table values cannot contain `,`"));
    }
    Ok(())
}

/// No line breaks, no surrounding whitespace: both would be lost on re-read.
fn check_bare(text: &str, path: &str) -> Result<()> {
    if text.contains(['\n', '\r']) {
        return Err(unrepresentable(path, "line breaks are not allowed"));
    }
    if text.trim() != text {
        return Err(unrepresentable(path, "leading or trailing whitespace is not preserved"));
    }
    Ok(())
}

fn unrepresentable(path: &str, reason: &str) -> TablangError {
    TablangError::Emit(format!("`{path}`: {reason}"))
}
