//! # tablang-core
//!
//! Parser for **tablang**, a small line-oriented configuration language, plus a
//! JSON bridge for the resulting document.
//!
//! A tablang source is a sequence of lines, each one of:
//!
//! - a constant: `name: value`
//! - a table block: `table([ key=value, ... ])`, on one line or spread over many
//! - a comment (`; ...`) or a blank line
//!
//! Values are integers (ASCII digits only), arrays of bare strings
//! (`{apple.orange.banana}`), inline tables (`table([a=1, b=2])`), or plain strings.
//!
//! ## Quick start
//!
//! ```rust
//! use tablang_core::{parse_str, Value};
//!
//! let doc = parse_str("name: John\nage: 25\nfruits: {apple.orange}").unwrap();
//! assert_eq!(doc.get("age"), Some(&Value::Integer(25)));
//! assert_eq!(
//!     doc.to_json().unwrap(),
//!     r#"{"name":"John","age":25,"fruits":["apple","orange"]}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`scanner`]: line classification and the top-level document build
//! - [`evaluator`]: raw value text → typed [`Value`]
//! - [`table`]: `table([ ... ])` reader, single- and multi-line
//! - [`cursor`]: the shared line source the scanner and table reader pull from
//! - [`emitter`]: [`Document`] → tablang text, and JSON → tablang text
//! - [`json`]: conversions between [`Document`] and `serde_json`
//! - [`error`]: error types for parse and emit failures
//! - [`types`]: the [`Value`] / [`Document`] model

pub mod cursor;
pub mod emitter;
pub mod error;
pub mod evaluator;
pub mod json;
pub mod scanner;
pub mod table;
pub mod types;

pub use cursor::{Exhausted, LineCursor, LineSource};
pub use emitter::{emit, emit_json};
pub use error::{Result, TablangError};
pub use evaluator::evaluate;
pub use scanner::{parse_lines, parse_str, Parser};
pub use table::read_table;
pub use types::{Document, Table, Value};
