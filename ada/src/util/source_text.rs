// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{ops::Deref, path::{Path, PathBuf}};

use super::LineSource;

/// An in-memory document, handed out line by line. Both `\n` and `\r\n` end a
/// line; a final terminator does not start another (empty) line.
#[derive(Debug, Clone, Default)]
pub struct SourceText {
    path: Option<PathBuf>,
    contents: String,
    position: usize,
}

impl SourceText {
    #[must_use]
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            path: None,
            contents: contents.into(),
            position: 0,
        }
    }

    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::new(contents)
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// The line with the given one-based number.
    #[must_use]
    pub fn line(&self, number: usize) -> Option<&str> {
        self.contents.lines().nth(number.checked_sub(1)?)
    }
}

impl LineSource for SourceText {
    fn next_line(&mut self) -> Option<&str> {
        if self.position >= self.contents.len() {
            return None;
        }

        let rest = &self.contents[self.position..];
        let (line, consumed) = match rest.find('\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };

        self.position += consumed;
        Some(line.strip_suffix('\r').unwrap_or(line))
    }

    fn rewind(&mut self) {
        self.position = 0;
    }
}

impl Deref for SourceText {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.contents()
    }
}

impl From<&str> for SourceText {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SourceText {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
