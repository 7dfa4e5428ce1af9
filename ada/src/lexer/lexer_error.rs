// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display};

use strum::AsRefStr;
use thiserror::Error;

use super::NumberErrorKind;

/// A lexical problem, reported alongside the invalid token it produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerError {
    /// One-based line number.
    pub line: usize,

    /// Zero-based column of the invalid token.
    pub column: usize,

    pub length: usize,
    pub kind: LexerErrorKind,
}

impl Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl Error for LexerError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum LexerErrorKind {
    #[error("unexpected character '{ch}'")]
    UnexpectedCharacter { ch: char },

    #[error("non terminated string")]
    UnterminatedString,

    #[error(transparent)]
    MalformedNumber(#[from] NumberErrorKind),
}

impl LexerErrorKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
