//! Error types for tablang parsing and emitting.

use thiserror::Error;

/// Errors that can occur while parsing or emitting tablang.
#[derive(Error, Debug)]
pub enum TablangError {
    /// The input was not valid tablang. The parse is abandoned; no partial
    /// document is returned.
    ///
    /// `line` is the 1-based number of the last source line read when the
    /// error was detected, or `None` when the text did not come from a line
    /// source (e.g. a direct [`evaluate`](crate::evaluate) call).
    #[error("syntax error{}: {message}", at_line(.line))]
    Syntax {
        line: Option<usize>,
        message: String,
    },

    /// The input string was not valid JSON (emit path).
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value cannot be written as tablang text that parses back to itself.
    #[error("emit error: {0}")]
    Emit(String),
}

impl TablangError {
    /// Build a syntax error; a line number of 0 means "no line read yet".
    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        TablangError::Syntax {
            line: (line > 0).then_some(line),
            message: message.into(),
        }
    }
}

fn at_line(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" at line {n}"),
        None => String::new(),
    }
}

/// Convenience alias used throughout tablang-core.
pub type Result<T> = std::result::Result<T, TablangError>;
