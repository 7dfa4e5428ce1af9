// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod line_source;
mod source_text;

pub use self::{
    line_source::LineSource,
    source_text::SourceText,
};
