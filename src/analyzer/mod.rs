//! # Statement Analyzer
//!
//! Syntax analysis of single-line assignment statements. The
//! [`Recognizer`](recognizer::Recognizer) pulls tokens from a
//! [`Lexer`](crate::tokenizer::lexer::Lexer) one at a time and collects
//! [`ErrorRecord`](error::ErrorRecord)s instead of returning errors.
//!
//! ## Position in the Pipeline
//!
//! ```text
//! Line → Lexer → Recognizer → Vec<ErrorRecord> → Report
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use stmtcheck::analyzer::check_line;
//!
//! let analysis = check_line("x = 1.");
//! assert_eq!(analysis.errors.len(), 1);
//! assert_eq!(analysis.errors[0].caret_line, "    ^^");
//! ```

pub mod error;
pub mod recognizer;

use serde::Serialize;

pub use error::{ErrorRecord, SyntaxError};
pub use recognizer::Recognizer;

use crate::tokenizer::{lexer::Lexer, token::AuditEntry};

/// Everything learned about one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineAnalysis {
    pub line: String,
    pub errors: Vec<ErrorRecord>,
    pub tokens: Vec<AuditEntry>,
}

impl LineAnalysis {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Runs a fresh lexer and recognizer over `line`.
#[tracing::instrument(level = "debug")]
pub fn check_line(line: &str) -> LineAnalysis {
    let (errors, tokens) = Recognizer::new(Lexer::new(line)).into_parts();
    tracing::debug!("{} error(s) found", errors.len());
    LineAnalysis {
        line: line.to_string(),
        errors,
        tokens,
    }
}
