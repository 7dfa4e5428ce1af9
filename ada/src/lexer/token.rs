// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::TokenType;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenType,

    /// One-based line number.
    pub line: usize,

    /// Zero-based character offset of the first character within the line.
    pub column: usize,

    /// Length in characters.
    pub length: usize,

    /// The decoded value of literals and comments, the spelling of
    /// identifiers, attributes and numbers, or the diagnostic of an invalid
    /// token.
    pub text: Option<String>,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenType, line: usize, column: usize, length: usize, text: Option<String>) -> Self {
        Self {
            kind,
            line,
            column,
            length,
            text,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// The zero-based column just past the last character.
    #[must_use]
    pub const fn end_column(&self) -> usize {
        self.column + self.length
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        !matches!(self.kind, TokenType::EndOfInput | TokenType::Invalid)
    }

    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenType::EndOfInput
    }

    #[must_use]
    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }

    #[must_use]
    pub fn is_delimiter(&self) -> bool {
        self.kind.is_delimiter()
    }

    #[must_use]
    pub fn is_number(&self) -> bool {
        self.kind.is_number()
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self.kind, TokenType::String | TokenType::Character)
    }

    #[must_use]
    pub fn is_identifier(&self) -> bool {
        self.kind == TokenType::Identifier
    }

    #[must_use]
    pub fn is_attribute(&self) -> bool {
        self.kind == TokenType::Attribute
    }

    #[must_use]
    pub fn is_comment(&self) -> bool {
        self.kind == TokenType::Comment
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.text) {
            (TokenType::String, Some(text)) => write!(f, "\"{}\"", text.replace('"', "\"\"")),
            (TokenType::Character, Some(text)) => write!(f, "'{text}'"),
            (TokenType::Comment, Some(text)) => write!(f, "--{text}"),
            (TokenType::Invalid, Some(text)) => write!(f, "? {text}"),
            (_, Some(text)) => f.write_str(text),
            (kind, None) => f.write_str(kind.symbol().unwrap_or(kind.name())),
        }
    }
}
