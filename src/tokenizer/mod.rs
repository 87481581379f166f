//! # Tokenizer Component
//!
//! Lexical analysis for a single assignment statement. The [`Lexer`](lexer::Lexer)
//! turns one line of text into tokens on demand, one per call to
//! [`Lexer::lex`](lexer::Lexer::lex); nothing is buffered beyond the current token.
//!
//! ## Component Structure
//!
//! * [`char_class`]: classification of single characters
//! * [`token`]: token kinds and the audit log entry
//! * [`cursor`]: the diagnostic column shared with the analyzer
//! * [`lexer`]: token assembly
//!
//! ## Error Handling
//!
//! Lexing never fails. Characters outside the grammar become
//! [`TokenKind::Unknown`](token::TokenKind::Unknown) tokens and are rejected later
//! by the analyzer.
//!
//! ## Usage Example
//!
//! ```rust
//! use stmtcheck::tokenizer::{lexer::Lexer, token::TokenKind};
//!
//! let mut lexer = Lexer::new("x = 42");
//! assert_eq!(lexer.lex(), TokenKind::Identifier);
//! assert_eq!(lexer.lex(), TokenKind::AssignOp);
//! assert_eq!(lexer.lex(), TokenKind::NumericLiteral);
//! assert_eq!(lexer.lexeme(), "42");
//! assert_eq!(lexer.lex(), TokenKind::EndOfLine);
//! ```

pub mod char_class;
pub mod cursor;
pub mod lexer;
pub mod token;
