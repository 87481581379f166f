use serde::Serialize;
use strum_macros::AsRefStr;
use thiserror::Error;

/// Reasons a grammar expectation can fail.
///
/// None of these abort a line; the recognizer records them and keeps going.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Serialize)]
pub enum SyntaxError {
    #[error("expected an assignment operator")]
    MissingAssignOperator,
    #[error("expected an identifier or numerical-literal")]
    MissingTermExpression,
    #[error("invalid identifier")]
    InvalidIdentifier,
    #[error("invalid numerical literal")]
    InvalidNumericLiteral,
    #[error("expected an operator")]
    MissingOperator,
}

/// A located diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub kind: SyntaxError,
    /// Full human readable message, e.g.
    /// `Syntax error: invalid identifier at position 0 (got: 1)`
    pub message: String,
    /// Column of the offending lexeme in the original line
    pub position: usize,
    /// Number of carets; the lexeme width, or 1 at end of line
    pub width: usize,
    /// Spaces up to `position`, then `width` carets
    pub caret_line: String,
    /// Lexeme that was current when the error was detected
    pub found: String,
}

impl ErrorRecord {
    pub fn new(kind: SyntaxError, position: usize, width: usize, found: &str) -> Self {
        Self {
            kind,
            message: format!(
                "Syntax error: {} at position {} (got: {})",
                kind, position, found
            ),
            position,
            width,
            caret_line: format!("{}{}", " ".repeat(position), "^".repeat(width)),
            found: found.to_string(),
        }
    }
}

impl std::fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
