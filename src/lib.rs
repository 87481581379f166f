//! # stmtcheck: assignment statement checker
//!
//! Validates single-line assignment statements of the form
//!
//! ```text
//! <identifier> = <term> { <operator> <term> }
//! ```
//!
//! where a term is an identifier or a numeric literal, and reports every syntax
//! error with its character position and a caret line underlining the offending
//! lexeme.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Line → Tokenizer → Analyzer → Report → Formatter
//! ```
//!
//! ### Stage 1: Tokenization
//!
//! The [`tokenizer`] module classifies characters and assembles tokens on demand.
//!
//! ### Stage 2: Analysis
//!
//! The [`analyzer`] module recognizes the grammar by recursive descent, recovering
//! from each error by skipping one token. Syntax errors are collected as data, so
//! checking a line never fails.
//!
//! ### Stage 3: Reporting
//!
//! The [`runner`] walks numbered input files and builds a [`report::Report`];
//! the [`formatter`] renders it as text or JSON.
//!
//! ## Example
//!
//! ```rust
//! use stmtcheck::check_line;
//!
//! assert!(check_line("total = a + 2.5 * b").is_valid());
//!
//! let analysis = check_line("x 1");
//! assert_eq!(
//!     analysis.errors[0].message,
//!     "Syntax error: expected an assignment operator at position 2 (got: 1)"
//! );
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod formatter;
pub mod report;
pub mod runner;
pub mod tokenizer;

// Re-exports
pub use analyzer::{check_line, ErrorRecord, LineAnalysis, SyntaxError};
pub use error::*;
