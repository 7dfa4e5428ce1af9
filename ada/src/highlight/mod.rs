// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod highlight_span;
mod highlighter;
mod token_category;

pub use self::{
    highlight_span::{token_type_at, HighlightSpan},
    highlighter::Highlighter,
    token_category::TokenCategory,
};
