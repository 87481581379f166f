//! # Character Classification
//!
//! Every character the lexer reads is first sorted into a [`CharClass`]. The class,
//! not the character itself, decides how the next lexeme is assembled.
//!
//! Only a fixed ASCII alphabet counts as [`CharClass::Letter`]; accented or other
//! non-ASCII letters fall into [`CharClass::Unknown`].

use strum_macros::{AsRefStr, Display};

/// Upper and lower case letters accepted in identifiers.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Category of a single character that has just been read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum CharClass {
    /// A member of [`ALPHABET`]
    Letter,
    /// `0` through `9`
    Digit,
    /// The decimal point `.`
    Decimal,
    /// Anything else, including operators, `=` and tabs
    Unknown,
    /// No character is left on the line
    EndOfInput,
}

impl CharClass {
    /// Classifies the pending character; `None` means the line is exhausted.
    pub fn of(ch: Option<char>) -> Self {
        match ch {
            None => CharClass::EndOfInput,
            Some(c) if is_letter(c) => CharClass::Letter,
            Some(c) if is_digit(c) => CharClass::Digit,
            Some('.') => CharClass::Decimal,
            Some(_) => CharClass::Unknown,
        }
    }
}

pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
