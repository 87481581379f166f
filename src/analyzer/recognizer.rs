//! # Recursive-Descent Recognizer
//!
//! Recognizes
//!
//! ```text
//! assignment  := identifier '=' term { operator term }
//! term        := identifier | numeric-literal
//! identifier  := letter { letter | digit }
//! numeric-lit := [ '+' | '-' ] digit { digit } [ '.' digit { digit } ]
//! operator    := '+' | '-' | '*' | '/' | '%'
//! ```
//!
//! Every failed expectation is recorded and then skipped by fetching exactly one
//! more token. The recognizer never backtracks and never gives up on a line; the
//! end-of-line token is sticky, so the top-level loop always reaches it.

use tracing::debug;

use super::error::{ErrorRecord, SyntaxError};
use crate::tokenizer::{
    char_class::{is_digit, is_letter},
    lexer::Lexer,
    token::{AuditEntry, TokenKind},
};

/// Outcome of looking for an operator after a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OperatorCheck {
    Found,
    EndOfLine,
    /// Neither an operator nor end of line; already recorded.
    Missing,
}

/// Validates one line; the work happens in [`Recognizer::new`].
#[derive(Debug)]
pub struct Recognizer<'a> {
    lexer: Lexer<'a>,
    errors: Vec<ErrorRecord>,
}

impl<'a> Recognizer<'a> {
    /// Primes the lexer and recognizes the whole line.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        lexer.lex();
        let mut recognizer = Self {
            lexer,
            errors: Vec::new(),
        };
        recognizer.assignment_statement();
        recognizer
    }

    /// Diagnostics in detection order; empty when the line is valid.
    pub fn errors(&self) -> &[ErrorRecord] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn lexer(&self) -> &Lexer<'a> {
        &self.lexer
    }

    pub fn into_parts(self) -> (Vec<ErrorRecord>, Vec<AuditEntry>) {
        (self.errors, self.lexer.into_output())
    }

    fn assignment_statement(&mut self) {
        self.identifier();

        if self.lexer.token() != TokenKind::AssignOp {
            self.add_error(SyntaxError::MissingAssignOperator);
        } else {
            self.lexer.advance_position(1);
        }

        loop {
            let token = self.lexer.lex();
            if token == TokenKind::Identifier {
                self.identifier();
            } else if token == TokenKind::NumericLiteral || token.is_sign() {
                self.numerical_literal();
            } else {
                self.add_error(SyntaxError::MissingTermExpression);
                self.lexer.lex();
            }

            if self.operator() == OperatorCheck::EndOfLine {
                break;
            }
        }
    }

    fn identifier(&mut self) {
        let valid = self
            .lexer
            .lexeme()
            .chars()
            .enumerate()
            .all(|(i, c)| (i != 0 || is_letter(c)) && c.is_alphanumeric());

        if valid {
            let width = self.lexer.lexeme_width();
            self.lexer.advance_position(width);
        } else {
            self.add_error(SyntaxError::InvalidIdentifier);
        }
        self.lexer.lex();
    }

    fn numerical_literal(&mut self) {
        if self.lexer.token().is_sign() {
            self.lexer.lex();
            self.lexer.advance_position(1);
        }

        let lexeme = self.lexer.lexeme();
        let valid = lexeme.chars().all(|c| is_digit(c) || c == '.')
            && lexeme.chars().last().is_none_or(is_digit);

        if valid {
            let width = self.lexer.lexeme_width();
            self.lexer.advance_position(width);
        } else {
            self.add_error(SyntaxError::InvalidNumericLiteral);
        }
        self.lexer.lex();
    }

    fn operator(&mut self) -> OperatorCheck {
        let token = self.lexer.token();
        if token.is_operator() {
            self.lexer.advance_position(1);
            OperatorCheck::Found
        } else if token == TokenKind::EndOfLine {
            self.lexer.advance_position(1);
            OperatorCheck::EndOfLine
        } else {
            self.add_error(SyntaxError::MissingOperator);
            OperatorCheck::Missing
        }
    }

    fn add_error(&mut self, kind: SyntaxError) {
        let position = self.lexer.position();
        let width = if self.lexer.token() == TokenKind::EndOfLine {
            1
        } else {
            self.lexer.lexeme_width()
        };

        let record = ErrorRecord::new(kind, position, width, self.lexer.lexeme());
        debug!("{}", record);

        self.lexer.advance_position(width);
        self.errors.push(record);
    }
}
