// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::debug;

use crate::{LineSource, SourceText};

use super::{LexerError, LineCursor, Token, TokenType};

/// Splits Ada source text into tokens, pulling lines from a [`LineSource`]
/// as they are needed.
///
/// Scanning never fails: malformed input produces [`TokenType::Invalid`]
/// tokens, and every token except the final [`TokenType::EndOfInput`]
/// consumes at least one character.
#[derive(Debug)]
pub struct Scanner<S = SourceText> {
    source: Option<S>,
    cursor: LineCursor,
}

impl<S: LineSource> Scanner<S> {
    /// A scanner without a source, which is at its end right away.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cursor: LineCursor::new(),
        }
    }

    #[must_use]
    pub fn with_source(source: S) -> Self {
        let mut scanner = Self::new();
        scanner.set_source(Some(source));
        scanner
    }

    /// Replaces the source (`None` detaches it) and resets the scanner.
    pub fn set_source(&mut self, source: Option<S>) {
        debug!("Attaching {} source", if source.is_some() { "a" } else { "no" });
        self.source = source;
        self.reset();
    }

    #[must_use]
    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Starts over at the first line of the source.
    pub fn reset(&mut self) {
        if let Some(source) = &mut self.source {
            source.rewind();
        }

        self.cursor.reset();
    }

    #[must_use]
    pub fn cursor(&self) -> &LineCursor {
        &self.cursor
    }

    pub fn next_token(&mut self) -> Token {
        let Some(source) = &mut self.source else {
            return self.cursor.end_of_input();
        };

        loop {
            if let Some(token) = self.cursor.scan_token() {
                return token;
            }

            match source.next_line() {
                Some(line) => self.cursor.load_line(line),
                None => return self.cursor.end_of_input(),
            }
        }
    }

    /// Scans everything up to the end of the input. The end-of-input token is
    /// not included.
    pub fn collect_all(mut self) -> (Vec<Token>, Vec<LexerError>) {
        let tokens = self.by_ref().collect();
        (tokens, self.cursor.take_errors())
    }
}

impl<S: LineSource> Default for Scanner<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: LineSource> Iterator for Scanner<S> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (token.kind != TokenType::EndOfInput).then_some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scanner(input: &str) -> Scanner {
        Scanner::with_source(SourceText::new(input))
    }

    #[test]
    fn no_source_is_end_of_input() {
        let mut scanner = Scanner::<SourceText>::new();
        assert_eq!(scanner.next_token(), Token::new(TokenType::EndOfInput, 0, 0, 0, None));
        assert_eq!(scanner.next_token().kind, TokenType::EndOfInput);
    }

    #[test]
    fn detaching_source_ends_input() {
        let mut scanner = scanner("begin");
        scanner.set_source(None);
        assert!(scanner.next_token().is_eof());
    }

    #[test]
    fn empty_source() {
        assert!(scanner("").next_token().is_eof());
        assert!(scanner("\n\n   \n").next_token().is_eof());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut scanner = scanner("\n\n   X\n");
        assert_eq!(scanner.next_token(), Token::new(TokenType::Identifier, 3, 3, 1, Some("X".into())));

        let eof = scanner.next_token();
        assert_eq!((eof.kind, eof.line, eof.length), (TokenType::EndOfInput, 3, 0));
    }

    #[test]
    fn end_of_input_repeats() {
        let mut scanner = scanner("null;");
        assert_eq!(scanner.next_token().kind, TokenType::Null);
        assert_eq!(scanner.next_token().kind, TokenType::Semicolon);
        assert!(scanner.next_token().is_eof());
        assert!(scanner.next_token().is_eof());
    }

    #[test]
    fn reset_rewinds() {
        let mut scanner = scanner("A'First\nB");
        let first: Vec<_> = scanner.by_ref().collect();

        scanner.reset();
        assert_eq!(scanner.cursor().line_number(), 0);
        assert_eq!(scanner.cursor().last_kind(), TokenType::Invalid);

        let second: Vec<_> = scanner.by_ref().collect();
        assert_eq!(first, second);
        assert_eq!(second.len(), 4);

        scanner.reset();
        scanner.reset();
        assert_eq!(scanner.next_token(), first[0]);
    }

    #[test]
    fn collect_all_reports_errors() {
        let (tokens, errors) = scanner("X := 16#FG#;\nY := \"open").collect_all();

        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, [
            TokenType::Identifier,
            TokenType::Assign,
            TokenType::Invalid,
            TokenType::Identifier,
            TokenType::Invalid,
            TokenType::Semicolon,
            TokenType::Identifier,
            TokenType::Assign,
            TokenType::Invalid,
        ]);

        let messages: Vec<_> = errors.iter().map(|e| (e.line, e.column, e.to_string())).collect();
        assert_eq!(messages, [
            (1, 5, "expecting extended digit".to_string()),
            (1, 10, "unexpected character '#'".to_string()),
            (2, 5, "non terminated string".to_string()),
        ]);
    }

    #[test]
    fn borrowed_source() {
        let mut source = SourceText::new("loop");
        let mut scanner = Scanner::with_source(&mut source);
        assert_eq!(scanner.next_token().kind, TokenType::Loop);
    }
}
