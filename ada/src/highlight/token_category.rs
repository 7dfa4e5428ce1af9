// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::{AsRefStr, EnumIter};

use crate::TokenType;

/// The coarse group a highlighter assigns a display style to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum TokenCategory {
    Comment,
    String,
    Character,
    Number,
    Delimiter,
    Keyword,
    Identifier,
    Attribute,
    Invalid,
}

impl TokenCategory {
    #[must_use]
    pub fn of(ty: TokenType) -> Self {
        match ty {
            TokenType::Comment => Self::Comment,
            TokenType::String => Self::String,
            TokenType::Character => Self::Character,
            TokenType::Number => Self::Number,
            ty if ty.is_delimiter() => Self::Delimiter,
            ty if ty.is_keyword() => Self::Keyword,
            TokenType::Identifier => Self::Identifier,
            TokenType::Attribute => Self::Attribute,
            _ => Self::Invalid,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

impl From<TokenType> for TokenCategory {
    fn from(value: TokenType) -> Self {
        Self::of(value)
    }
}
