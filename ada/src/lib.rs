// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
mod highlight;
mod lexer;
mod util;

pub use self::{
    config::{ConfigError, ConfigRoot, ConfigSectionLexer, ConfigSectionLog, CONFIG_FILE_NAME},
    highlight::{token_type_at, HighlightSpan, Highlighter, TokenCategory},
    lexer::*,
    util::{LineSource, SourceText},
};
