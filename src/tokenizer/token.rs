use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter};

/// Grammatical category of an assembled lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Identifier,
    NumericLiteral,
    /// `+`
    AddOp,
    /// `-`, or the en dash `–` that word processors substitute for it
    SubOp,
    /// `*`
    MultOp,
    /// `/`
    DivOp,
    /// `%`
    ModOp,
    /// `=`
    AssignOp,
    EndOfLine,
    Unknown,
}

/// Lexeme reported for the synthetic end-of-line token.
pub const END_OF_LINE_LEXEME: &str = "EOL";

impl TokenKind {
    /// Single-character lookup for everything that is not a letter, digit or end of line.
    pub fn from_symbol(ch: char) -> Self {
        match ch {
            '+' => TokenKind::AddOp,
            '-' | '–' => TokenKind::SubOp,
            '*' => TokenKind::MultOp,
            '/' => TokenKind::DivOp,
            '%' => TokenKind::ModOp,
            '=' => TokenKind::AssignOp,
            _ => TokenKind::Unknown,
        }
    }

    /// The five arithmetic operators allowed between terms.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::AddOp
                | TokenKind::SubOp
                | TokenKind::MultOp
                | TokenKind::DivOp
                | TokenKind::ModOp
        )
    }

    /// Operators that may prefix a numeric literal.
    pub fn is_sign(&self) -> bool {
        matches!(self, TokenKind::AddOp | TokenKind::SubOp)
    }
}

/// One `(kind, lexeme)` pair of the lexer's audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl AuditEntry {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }
}

impl std::fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.kind, self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_symbol_lookup() {
        let test_cases = [
            ('+', TokenKind::AddOp),
            ('-', TokenKind::SubOp),
            ('–', TokenKind::SubOp),
            ('*', TokenKind::MultOp),
            ('/', TokenKind::DivOp),
            ('%', TokenKind::ModOp),
            ('=', TokenKind::AssignOp),
            ('.', TokenKind::Unknown),
            ('$', TokenKind::Unknown),
        ];

        for (input, expected) in test_cases.iter() {
            assert_eq!(TokenKind::from_symbol(*input), *expected);
        }
    }

    #[test]
    fn test_operator_set() {
        let operators: Vec<_> = TokenKind::iter().filter(|k| k.is_operator()).collect();
        assert_eq!(
            operators,
            vec![
                TokenKind::AddOp,
                TokenKind::SubOp,
                TokenKind::MultOp,
                TokenKind::DivOp,
                TokenKind::ModOp
            ]
        );
        assert!(!TokenKind::AssignOp.is_operator());
        assert!(TokenKind::SubOp.is_sign());
        assert!(!TokenKind::MultOp.is_sign());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TokenKind::NumericLiteral.to_string(), "NUMERIC_LITERAL");
        assert_eq!(TokenKind::AssignOp.as_ref(), "ASSIGN_OP");
        assert_eq!(
            AuditEntry::new(TokenKind::Identifier, "total").to_string(),
            "(IDENTIFIER, total)"
        );
    }
}
