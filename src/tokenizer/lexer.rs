use std::str::Chars;

use super::{
    char_class::CharClass,
    cursor::Cursor,
    token::{AuditEntry, TokenKind, END_OF_LINE_LEXEME},
};

/// Pull-based lexer over a single line.
///
/// The lexer holds exactly one token: the one produced by the most recent call to
/// [`Lexer::lex`]. Its kind and lexeme stay readable until the next call.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    remaining: Chars<'a>,
    next_char: Option<char>,
    char_class: CharClass,
    token: TokenKind,
    lexeme: String,
    cursor: Cursor,
    output: Vec<AuditEntry>,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a str) -> Self {
        let mut lexer = Self {
            remaining: line.chars(),
            next_char: None,
            char_class: CharClass::EndOfInput,
            token: TokenKind::Unknown,
            lexeme: String::new(),
            cursor: Cursor::new(),
            output: Vec::new(),
        };
        lexer.advance_char();
        lexer
    }

    /// Assembles the next token and returns its kind.
    ///
    /// Never fails: characters outside the grammar come back as [`TokenKind::Unknown`],
    /// and once the line is exhausted every call yields [`TokenKind::EndOfLine`].
    pub fn lex(&mut self) -> TokenKind {
        self.lexeme.clear();
        self.skip_blanks();

        self.token = match self.char_class {
            CharClass::Letter => {
                self.add_char();
                self.advance_char();
                self.append_while(|class| matches!(class, CharClass::Letter | CharClass::Digit));
                TokenKind::Identifier
            }
            CharClass::Digit => {
                self.add_char();
                self.advance_char();
                self.append_while(|class| class == CharClass::Digit);
                if self.char_class == CharClass::Decimal {
                    self.add_char();
                    self.advance_char();
                    self.append_while(|class| class == CharClass::Digit);
                }
                TokenKind::NumericLiteral
            }
            CharClass::EndOfInput => {
                self.lexeme.push_str(END_OF_LINE_LEXEME);
                TokenKind::EndOfLine
            }
            CharClass::Decimal | CharClass::Unknown => {
                let kind = self
                    .next_char
                    .map(TokenKind::from_symbol)
                    .unwrap_or(TokenKind::Unknown);
                self.add_char();
                self.advance_char();
                kind
            }
        };

        if self.token != TokenKind::EndOfLine {
            self.output.push(AuditEntry::new(self.token, self.lexeme.clone()));
        }
        tracing::trace!(
            "lexed {} {:?} at position {}",
            self.token,
            self.lexeme,
            self.cursor.position()
        );
        self.token
    }

    /// Kind of the current token.
    pub fn token(&self) -> TokenKind {
        self.token
    }

    /// Text of the current token, or `"EOL"` at end of line.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Width of the current lexeme in characters.
    pub fn lexeme_width(&self) -> usize {
        self.lexeme.chars().count()
    }

    /// Current diagnostic column.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Moves the diagnostic column past text the caller has accounted for.
    pub fn advance_position(&mut self, width: usize) {
        self.cursor.advance(width);
    }

    /// Every token produced so far, excluding end of line.
    pub fn output(&self) -> &[AuditEntry] {
        &self.output
    }

    pub fn into_output(self) -> Vec<AuditEntry> {
        self.output
    }

    fn advance_char(&mut self) {
        self.next_char = self.remaining.next();
        self.char_class = CharClass::of(self.next_char);
    }

    fn add_char(&mut self) {
        if let Some(ch) = self.next_char {
            self.lexeme.push(ch);
        }
    }

    fn append_while(&mut self, accept: impl Fn(CharClass) -> bool) {
        while accept(self.char_class) {
            self.add_char();
            self.advance_char();
        }
    }

    // Only the space character counts as a blank; tabs lex as unknown tokens.
    fn skip_blanks(&mut self) {
        while self.next_char == Some(' ') {
            self.cursor.advance(1);
            self.advance_char();
        }
    }
}

/// Yields tokens up to, but not including, the end of line.
impl Iterator for Lexer<'_> {
    type Item = AuditEntry;

    fn next(&mut self) -> Option<Self::Item> {
        match self.lex() {
            TokenKind::EndOfLine => None,
            kind => Some(AuditEntry::new(kind, self.lexeme.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(line: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(line).map(|e| (e.kind, e.lexeme)).collect()
    }

    #[test]
    fn test_assignment_tokens() {
        assert_eq!(
            kinds("total = a1 + 2.5"),
            vec![
                (TokenKind::Identifier, "total".to_string()),
                (TokenKind::AssignOp, "=".to_string()),
                (TokenKind::Identifier, "a1".to_string()),
                (TokenKind::AddOp, "+".to_string()),
                (TokenKind::NumericLiteral, "2.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_numeric_literal_takes_one_decimal_point() {
        assert_eq!(
            kinds("1.2.3"),
            vec![
                (TokenKind::NumericLiteral, "1.2".to_string()),
                (TokenKind::Unknown, ".".to_string()),
                (TokenKind::NumericLiteral, "3".to_string()),
            ]
        );
        assert_eq!(kinds("7."), vec![(TokenKind::NumericLiteral, "7.".to_string())]);
    }

    #[test]
    fn test_digit_then_letter_splits() {
        assert_eq!(
            kinds("1x"),
            vec![
                (TokenKind::NumericLiteral, "1".to_string()),
                (TokenKind::Identifier, "x".to_string()),
            ]
        );
    }

    #[test]
    fn test_operators_and_unknown() {
        assert_eq!(
            kinds("+-–*/%=$"),
            vec![
                (TokenKind::AddOp, "+".to_string()),
                (TokenKind::SubOp, "-".to_string()),
                (TokenKind::SubOp, "–".to_string()),
                (TokenKind::MultOp, "*".to_string()),
                (TokenKind::DivOp, "/".to_string()),
                (TokenKind::ModOp, "%".to_string()),
                (TokenKind::AssignOp, "=".to_string()),
                (TokenKind::Unknown, "$".to_string()),
            ]
        );
    }

    #[test]
    fn test_end_of_line_is_sticky() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.lex(), TokenKind::Identifier);
        assert_eq!(lexer.lex(), TokenKind::EndOfLine);
        assert_eq!(lexer.lexeme(), "EOL");
        assert_eq!(lexer.lex(), TokenKind::EndOfLine);
        assert_eq!(lexer.output().len(), 1);
    }

    #[test]
    fn test_blanks_advance_position() {
        let mut lexer = Lexer::new("   x");
        lexer.lex();
        assert_eq!(lexer.position(), 3);
        assert_eq!(lexer.lexeme(), "x");

        // tabs are not blanks
        let mut lexer = Lexer::new("\tx");
        assert_eq!(lexer.lex(), TokenKind::Unknown);
        assert_eq!(lexer.position(), 0);
    }

    #[test]
    fn test_lexeme_width_counts_chars() {
        let mut lexer = Lexer::new("–");
        lexer.lex();
        assert_eq!(lexer.lexeme_width(), 1);
    }

    #[test]
    fn test_audit_log() {
        let mut lexer = Lexer::new("x = 1");
        while lexer.lex() != TokenKind::EndOfLine {}
        let log: Vec<String> = lexer.output().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            log,
            vec!["(IDENTIFIER, x)", "(ASSIGN_OP, =)", "(NUMERIC_LITERAL, 1)"]
        );
    }
}
