//! Value evaluation: raw value text → typed [`Value`].
//!
//! Rules, first match wins:
//!
//! 1. ASCII digits only → [`Value::Integer`] (no sign, no decimal point)
//! 2. `{...}` → [`Value::Array`] of the `.`-separated, non-empty pieces
//! 3. `table([...])` → [`Value::Table`], read as an inline table
//! 4. anything else → [`Value::String`], the trimmed text as-is

use crate::cursor::Exhausted;
use crate::error::{Result, TablangError};
use crate::table::{read_table, TABLE_CLOSE, TABLE_OPEN};
use crate::types::Value;

/// Evaluate a raw value token.
///
/// Never fails on plain text; errors come only from an integer literal that
/// does not fit in `i64` or from a malformed inline table.
///
/// ```
/// use tablang_core::{evaluate, Value};
///
/// assert_eq!(evaluate("42").unwrap(), Value::Integer(42));
/// assert_eq!(evaluate("-42").unwrap(), Value::String("-42".into()));
/// assert_eq!(
///     evaluate("{a.b.c}").unwrap(),
///     Value::Array(vec!["a".into(), "b".into(), "c".into()])
/// );
/// ```
pub fn evaluate(raw: &str) -> Result<Value> {
    evaluate_at(raw, 0)
}

/// [`evaluate`], attributing any error to source line `line`.
pub(crate) fn evaluate_at(raw: &str, line: usize) -> Result<Value> {
    let value = raw.trim();

    if is_integer_literal(value) {
        return value.parse::<i64>().map(Value::Integer).map_err(|_| {
            TablangError::syntax(line, format!("integer literal out of range: {value}"))
        });
    }

    if let Some(inner) = value.strip_prefix('{').and_then(|v| v.strip_suffix('}')) {
        return Ok(Value::Array(parse_array(inner)));
    }

    if value.starts_with(TABLE_OPEN) && value.ends_with(TABLE_CLOSE) {
        return read_table(value, &mut Exhausted::at(line)).map(Value::Table);
    }

    Ok(Value::String(value.to_string()))
}

fn is_integer_literal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Split an array body on `.`, dropping empty pieces.
fn parse_array(inner: &str) -> Vec<String> {
    inner
        .split('.')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
