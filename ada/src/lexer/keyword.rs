// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{collections::HashMap, sync::LazyLock};

use super::TokenType;

/// "synchronized"
const LONGEST_KEYWORD: usize = 12;

static RESERVED_WORDS: LazyLock<HashMap<&'static str, TokenType>> = LazyLock::new(|| {
    TokenType::keywords()
        .map(|ty| (ty.name(), ty))
        .collect()
});

/// Finds the reserved word spelled by `spelling`, ignoring letter case.
///
/// Always recognizes the complete Ada 2012 vocabulary; use
/// [`AdaVersion::contains`](super::AdaVersion::contains) to decide whether a
/// keyword is reserved in an older revision.
#[must_use]
pub fn classify(spelling: &str) -> Option<TokenType> {
    if spelling.is_empty() || spelling.len() > LONGEST_KEYWORD {
        return None;
    }

    RESERVED_WORDS.get(spelling.to_ascii_lowercase().as_str()).copied()
}

#[must_use]
pub fn is_ada83_keyword(ty: TokenType) -> bool {
    ty.is_keyword() && !is_ada95_addition(ty) && !is_ada05_addition(ty) && ty != TokenType::Some
}

#[must_use]
pub fn is_ada95_keyword(ty: TokenType) -> bool {
    is_ada95_addition(ty) || is_ada83_keyword(ty)
}

#[must_use]
pub fn is_ada05_keyword(ty: TokenType) -> bool {
    is_ada05_addition(ty) || is_ada95_keyword(ty)
}

#[must_use]
pub fn is_ada12_keyword(ty: TokenType) -> bool {
    ty == TokenType::Some || is_ada05_keyword(ty)
}

fn is_ada95_addition(ty: TokenType) -> bool {
    matches!(ty,
        TokenType::Abstract
        | TokenType::Aliased
        | TokenType::Protected
        | TokenType::Requeue
        | TokenType::Tagged
        | TokenType::Until
    )
}

fn is_ada05_addition(ty: TokenType) -> bool {
    matches!(ty, TokenType::Interface | TokenType::Overriding | TokenType::Synchronized)
}
