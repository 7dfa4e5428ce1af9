// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{AdaVersion, Scanner, SourceText};

use super::HighlightSpan;

/// Produces highlight spans line by line, the way an editor re-highlights a
/// single block of text after every edit. Each line is scanned with fresh
/// state, so the result never depends on the lines around it.
#[derive(Debug, Default)]
pub struct Highlighter {
    scanner: Scanner<SourceText>,
    version: AdaVersion,
}

impl Highlighter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_version(version: AdaVersion) -> Self {
        Self {
            scanner: Scanner::new(),
            version,
        }
    }

    #[must_use]
    pub const fn version(&self) -> AdaVersion {
        self.version
    }

    /// Highlights the first line of `text`.
    pub fn highlight_line(&mut self, text: &str) -> Vec<HighlightSpan> {
        let line = text.lines().next().unwrap_or_default();
        self.scanner.set_source(Some(SourceText::new(line)));

        let mut spans = Vec::new();
        loop {
            let token = self.scanner.next_token();
            if token.is_eof() {
                break;
            }

            let mut span = HighlightSpan::from_token(&token);
            span.outside_version = token.is_keyword() && !self.version.contains(token.kind);
            spans.push(span);
        }

        self.scanner.set_source(None);
        spans
    }

    /// Highlights every line of `text`, one entry per line.
    pub fn highlight_document(&mut self, text: &str) -> Vec<Vec<HighlightSpan>> {
        text.lines()
            .map(|line| self.highlight_line(line))
            .collect()
    }
}
