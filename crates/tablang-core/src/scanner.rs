//! Line scanner: walks the source and builds the [`Document`].
//!
//! Every trimmed line is classified, in this order:
//!
//! 1. starts with `table([` → table block, stored under the fixed key `table`
//! 2. contains `:` → constant, split on the first `:`
//! 3. starts with `;` → comment
//! 4. empty → blank
//! 5. anything else → syntax error
//!
//! Constants are checked before comments, so a `;` line that contains a `:` is
//! read as a constant whose key starts with `;`.

use crate::cursor::{LineCursor, LineSource};
use crate::error::{Result, TablangError};
use crate::evaluator::evaluate_at;
use crate::table::{read_table, TABLE_OPEN};
use crate::types::{Document, Value};

/// Key every top-level table block is stored under. A later block replaces an
/// earlier one.
pub const TABLE_KEY: &str = "table";

/// What a single trimmed line is.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    TableStart,
    Constant { key: &'a str, value: &'a str },
    Comment,
    Blank,
}

fn classify(line: &str) -> Option<LineKind<'_>> {
    if line.starts_with(TABLE_OPEN) {
        return Some(LineKind::TableStart);
    }
    if let Some((key, value)) = line.split_once(':') {
        return Some(LineKind::Constant {
            key: key.trim(),
            value: value.trim(),
        });
    }
    if line.starts_with(';') {
        return Some(LineKind::Comment);
    }
    if line.is_empty() {
        return Some(LineKind::Blank);
    }
    None
}

/// The tablang parser.
///
/// `Parser` holds no state between calls: each [`parse`](Parser::parse) builds
/// into its own fresh [`Document`], so one instance can be reused freely.
#[derive(Debug, Default, Clone, Copy)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a sequence of raw lines into a [`Document`].
    ///
    /// The first malformed line aborts the parse; no partial document is returned.
    pub fn parse<T>(&self, lines: T) -> Result<Document>
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        self.parse_source(&mut LineCursor::new(lines))
    }

    /// Parse everything remaining in `source`.
    pub fn parse_source(&self, source: &mut dyn LineSource) -> Result<Document> {
        let mut doc = Document::new();
        scan(source, &mut doc)?;
        Ok(doc)
    }
}

/// Drive `source` to exhaustion, writing every constant and table into `doc`.
fn scan(source: &mut dyn LineSource, doc: &mut Document) -> Result<()> {
    while let Some(raw) = source.next_line() {
        let line = raw.trim();
        match classify(line) {
            Some(LineKind::TableStart) => {
                let table = read_table(line, source)?;
                doc.insert(TABLE_KEY, Value::Table(table));
            }
            Some(LineKind::Constant { key, value }) => {
                let value = evaluate_at(value, source.line_number())?;
                doc.insert(key, value);
            }
            Some(LineKind::Comment) | Some(LineKind::Blank) => {}
            None => {
                return Err(TablangError::syntax(
                    source.line_number(),
                    format!("unrecognized line: {line}"),
                ));
            }
        }
    }
    Ok(())
}

/// Parse a sequence of raw lines with a fresh [`Parser`].
pub fn parse_lines<T>(lines: T) -> Result<Document>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    Parser::new().parse(lines)
}

/// Parse a whole source text, split on line boundaries.
pub fn parse_str(text: &str) -> Result<Document> {
    parse_lines(text.lines())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_in_priority_order() {
        assert_eq!(classify("table([a=1])"), Some(LineKind::TableStart));
        assert_eq!(classify("table([x: 1"), Some(LineKind::TableStart));
        assert_eq!(
            classify("name :  John Smith "),
            Some(LineKind::Constant {
                key: "name",
                value: "John Smith"
            })
        );
        assert_eq!(
            classify("url: http://x"),
            Some(LineKind::Constant {
                key: "url",
                value: "http://x"
            })
        );
        assert_eq!(classify("; note"), Some(LineKind::Comment));
        assert_eq!(
            classify("; note: with colon"),
            Some(LineKind::Constant {
                key: "; note",
                value: "with colon"
            })
        );
        assert_eq!(classify(""), Some(LineKind::Blank));
        assert_eq!(classify("bogus"), None);
    }
}
