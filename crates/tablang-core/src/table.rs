//! Table reader for `table([ key=value, ... ])` blocks.
//!
//! A block opens with `table([` and runs until a trimmed fragment ends with
//! `])`. Fragments are joined with single spaces and the body is split on `,`,
//! so a value may span lines but can never contain a comma. Each pair splits on
//! its first `=`; the value goes through the evaluator, so table values can be
//! arrays or (single-line) inline tables.

use crate::cursor::LineSource;
use crate::error::{Result, TablangError};
use crate::evaluator::evaluate_at;
use crate::types::Table;

/// Opening token of a table block.
pub const TABLE_OPEN: &str = "table([";

/// Closing token of a table block.
pub const TABLE_CLOSE: &str = "])";

/// Read a table whose first line is `opening`, pulling more lines from
/// `source` until the closing `])` is found.
///
/// The read is all-or-nothing: a missing closing token or a pair without `=`
/// fails the whole table.
///
/// ```
/// use tablang_core::{read_table, LineCursor, Value};
///
/// let mut rest = LineCursor::new(["a=1,", "b={x.y}", "])", "after: 1"]);
/// let table = read_table("table([", &mut rest).unwrap();
/// assert_eq!(table["a"], Value::Integer(1));
/// assert_eq!(table["b"], Value::Array(vec!["x".into(), "y".into()]));
/// ```
pub fn read_table(opening: &str, source: &mut dyn LineSource) -> Result<Table> {
    let opening = opening.trim();
    let residual = opening.strip_prefix(TABLE_OPEN).ok_or_else(|| {
        TablangError::syntax(
            source.line_number(),
            format!("malformed table opening: {opening}"),
        )
    })?;

    let body = collect_body(residual.trim(), source)?;

    let mut table = Table::new();
    for pair in body.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            TablangError::syntax(
                source.line_number(),
                format!("expected key=value pair, found: {pair}"),
            )
        })?;
        let value = evaluate_at(value, source.line_number())?;
        table.insert(key.trim().to_string(), value);
    }
    Ok(table)
}

/// Accumulate fragments up to and including the one ending in `])`, then
/// join them (closing token removed) with single spaces.
fn collect_body(residual: &str, source: &mut dyn LineSource) -> Result<String> {
    let mut fragments = Vec::new();
    let mut fragment = residual.to_string();

    while !fragment.ends_with(TABLE_CLOSE) {
        let next = source.next_line().ok_or_else(|| {
            TablangError::syntax(source.line_number(), "no closing bracket found for table")
        })?;
        fragments.push(fragment);
        fragment = next.trim().to_string();
    }

    let last = &fragment[..fragment.len() - TABLE_CLOSE.len()];
    fragments.push(last.trim().to_string());
    Ok(fragments.join(" "))
}
