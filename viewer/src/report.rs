// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::Write, path::Path};

use ada::{SourceText, Token, TokenCategory};
use colored::{ColoredString, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A problem at a token, printed with the surrounding source lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,

    /// One-based.
    pub line: usize,

    /// Zero-based, in characters.
    pub column: usize,
    pub length: usize,
}

impl Diagnostic {
    pub fn at_token(severity: Severity, token: &Token, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            line: token.line,
            column: token.column,
            length: token.length,
        }
    }

    pub fn render(&self, source: &SourceText, path: &Path) -> String {
        let mut out = String::new();

        let (label, hint) = match self.severity {
            Severity::Error => ("error".red().bold(), "error occurred here".bright_red()),
            Severity::Warning => ("warning".yellow().bold(), "warning issued here".yellow()),
        };

        _ = writeln!(out, "{label}: {}", self.message.bold());
        _ = writeln!(out);

        if let Some(line) = self.line.checked_sub(1).and_then(|previous| source.line(previous)) {
            if !line.trim().is_empty() {
                _ = writeln!(out, "{line}");
            }
        }

        if let Some(line) = source.line(self.line) {
            _ = writeln!(out, "{line}");
            _ = writeln!(
                out,
                "{spaces}{caret}{tildes} {hint}",
                spaces = " ".repeat(self.column),
                caret = "^".bright_red().bold(),
                tildes = "~".repeat(self.length.saturating_sub(1)).bright_blue(),
            );
        }

        if let Some(line) = source.line(self.line + 1) {
            if !line.trim().is_empty() {
                _ = writeln!(out, "{line}");
            }
        }

        _ = writeln!(out);
        _ = writeln!(out, "In {}:{}:{}", path.display(), self.line, self.column + 1);
        out
    }
}

/// One line of the `tokens` listing: `line:col  Name  length  "payload"`.
pub fn token_line(token: &Token) -> String {
    let position = format!("{}:{}", token.line, token.column + 1);
    let name = paint(TokenCategory::of(token.kind), token.name());

    match &token.text {
        Some(text) => format!("{position:>8}  {name:<12}  {:>3}  {text:?}", token.length),
        None => format!("{position:>8}  {name:<12}  {:>3}", token.length),
    }
}

pub fn paint(category: TokenCategory, text: &str) -> ColoredString {
    match category {
        TokenCategory::Comment => text.bright_black(),
        TokenCategory::String | TokenCategory::Character => text.green(),
        TokenCategory::Number => text.cyan(),
        TokenCategory::Delimiter => text.normal(),
        TokenCategory::Keyword => text.blue().bold(),
        TokenCategory::Identifier => text.white(),
        TokenCategory::Attribute => text.magenta(),
        TokenCategory::Invalid => text.red().bold(),
    }
}
