// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{Token, TokenType};

use super::TokenCategory;

/// The formatting of one token within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub column: usize,
    pub length: usize,
    pub token_type: TokenType,
    pub category: TokenCategory,

    /// A keyword that the selected Ada revision does not reserve yet.
    pub outside_version: bool,
}

impl HighlightSpan {
    #[must_use]
    pub fn from_token(token: &Token) -> Self {
        Self {
            column: token.column,
            length: token.length,
            token_type: token.kind,
            category: token.kind.into(),
            outside_version: false,
        }
    }

    #[must_use]
    pub const fn contains(&self, column: usize) -> bool {
        column >= self.column && column < self.column + self.length
    }
}

/// The type of the token covering `column`, or [`TokenType::Invalid`] when
/// the column lies in whitespace or past the end of the line.
#[must_use]
pub fn token_type_at(spans: &[HighlightSpan], column: usize) -> TokenType {
    spans.iter()
        .find(|span| span.contains(column))
        .map(|span| span.token_type)
        .unwrap_or(TokenType::Invalid)
}
