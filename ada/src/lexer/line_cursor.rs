// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::trace;

use super::{keyword, LexerError, LexerErrorKind, NumberParser, Token, TokenType};

/// The mutable state of a [`Scanner`](super::Scanner): the line being
/// scanned, the position within it and the type of the previous token.
///
/// It knows nothing about where lines come from, so it can be driven with
/// synthetic lines.
#[derive(Debug, Clone)]
pub struct LineCursor {
    line: Vec<char>,
    line_number: usize,
    column: usize,
    last_kind: TokenType,
    errors: Vec<LexerError>,
}

impl LineCursor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            line: Vec::new(),
            line_number: 0,
            column: 0,
            last_kind: TokenType::Invalid,
            errors: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Makes `text` the current line, advancing the line number.
    pub fn load_line(&mut self, text: &str) {
        self.line.clear();
        self.line.extend(text.chars());
        self.line_number += 1;
        self.column = 0;
    }

    /// One-based number of the current line, zero before the first line.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    #[must_use]
    pub const fn last_kind(&self) -> TokenType {
        self.last_kind
    }

    #[must_use]
    pub fn errors(&self) -> &[LexerError] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<LexerError> {
        std::mem::take(&mut self.errors)
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.column >= self.line.len()
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek(0).is_some_and(char::is_whitespace) {
            self.column += 1;
        }
    }

    /// Scans the next token of the current line, or returns `None` when only
    /// whitespace remains.
    pub fn scan_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let ch = self.peek(0)?;
        let token = match CharClass::of(ch) {
            CharClass::Single(kind) => self.token(kind, 1, None),
            CharClass::Compound(single) => self.consume_compound(ch, single),
            CharClass::Dash => self.consume_minus_or_comment(),
            CharClass::Tick => self.consume_tick_or_character(),
            CharClass::Quote => self.consume_string(),
            CharClass::Digit => self.consume_number(),
            CharClass::Letter => self.consume_identifier_or_keyword(),
            CharClass::Other => self.invalid(LexerErrorKind::UnexpectedCharacter { ch }, 1),
        };

        Some(token)
    }

    /// The terminal token, positioned at the current location.
    pub fn end_of_input(&mut self) -> Token {
        self.token(TokenType::EndOfInput, 0, None)
    }

    fn consume_compound(&mut self, first: char, single: TokenType) -> Token {
        match compound_delimiter(first, self.peek(1)) {
            Some(double) => self.token(double, 2, None),
            None => self.token(single, 1, None),
        }
    }

    fn consume_minus_or_comment(&mut self) -> Token {
        if self.peek(1) != Some('-') {
            return self.token(TokenType::Minus, 1, None);
        }

        let text = self.line[self.column + 2..].iter().collect();
        self.token(TokenType::Comment, self.remaining(), Some(text))
    }

    /// `'x'` is a character literal, any other tick is a delimiter. Doubled
    /// ticks are not folded: `'''` is the tick character itself.
    fn consume_tick_or_character(&mut self) -> Token {
        match (self.peek(1), self.peek(2)) {
            (Some(ch), Some('\'')) => self.token(TokenType::Character, 3, Some(ch.to_string())),
            _ => self.token(TokenType::Tick, 1, None),
        }
    }

    fn consume_string(&mut self) -> Token {
        let mut value = String::new();
        let mut offset = 1;

        loop {
            match self.peek(offset) {
                Some('"') if self.peek(offset + 1) == Some('"') => {
                    value.push('"');
                    offset += 2;
                }

                Some('"') => break,

                Some(c) => {
                    value.push(c);
                    offset += 1;
                }

                None => return self.invalid(LexerErrorKind::UnterminatedString, self.remaining()),
            }
        }

        self.token(TokenType::String, offset + 1, Some(value))
    }

    fn consume_number(&mut self) -> Token {
        let result = NumberParser::new(&self.line, self.column).parse();

        match result {
            Ok(literal) => {
                let text = self.spelling(literal.length);
                self.token(TokenType::Number, literal.length, Some(text))
            }

            Err(error) => self.invalid(error.kind.into(), error.length),
        }
    }

    fn consume_identifier_or_keyword(&mut self) -> Token {
        let mut length = 1;
        while self.peek(length).is_some_and(is_identifier_char) {
            length += 1;
        }

        let spelling = self.spelling(length);

        // After a tick every name is an attribute, even `'Range` or `'Access`.
        if self.last_kind == TokenType::Tick {
            return self.token(TokenType::Attribute, length, Some(spelling));
        }

        match keyword::classify(&spelling) {
            Some(keyword) => self.token(keyword, length, None),
            None => self.token(TokenType::Identifier, length, Some(spelling)),
        }
    }

    fn invalid(&mut self, kind: LexerErrorKind, length: usize) -> Token {
        self.errors.push(LexerError {
            line: self.line_number,
            column: self.column,
            length,
            kind,
        });

        self.token(TokenType::Invalid, length, Some(kind.to_string()))
    }

    fn token(&mut self, kind: TokenType, length: usize, text: Option<String>) -> Token {
        let token = Token::new(kind, self.line_number, self.column, length, text);
        trace!("{}:{} {} ({length})", token.line, token.column, kind);

        self.column += length;
        self.last_kind = kind;
        token
    }

    fn spelling(&self, length: usize) -> String {
        self.line[self.column..self.column + length].iter().collect()
    }

    fn remaining(&self) -> usize {
        self.line.len().saturating_sub(self.column)
    }

    fn peek(&self, distance: usize) -> Option<char> {
        self.line.get(self.column + distance).copied()
    }
}

impl Default for LineCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// What a character can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    /// A delimiter that is never the first half of a longer one.
    Single(TokenType),

    /// A delimiter that may combine with the next character.
    Compound(TokenType),

    /// Either a minus or the start of a comment.
    Dash,

    Tick,
    Quote,
    Digit,
    Letter,
    Other,
}

impl CharClass {
    fn of(ch: char) -> Self {
        match ch {
            '&' => Self::Single(TokenType::Ampersand),
            '(' => Self::Single(TokenType::LeftParenthesis),
            ')' => Self::Single(TokenType::RightParenthesis),
            '+' => Self::Single(TokenType::Plus),
            ',' => Self::Single(TokenType::Comma),
            ';' => Self::Single(TokenType::Semicolon),
            '|' => Self::Single(TokenType::Bar),

            '*' => Self::Compound(TokenType::Star),
            '.' => Self::Compound(TokenType::Dot),
            '/' => Self::Compound(TokenType::Slash),
            ':' => Self::Compound(TokenType::Colon),
            '<' => Self::Compound(TokenType::LessThan),
            '=' => Self::Compound(TokenType::Equals),
            '>' => Self::Compound(TokenType::GreaterThan),

            '-' => Self::Dash,
            '\'' => Self::Tick,
            '"' => Self::Quote,

            c if c.is_ascii_digit() => Self::Digit,
            c if c.is_alphabetic() => Self::Letter,
            _ => Self::Other,
        }
    }
}

fn compound_delimiter(first: char, second: Option<char>) -> Option<TokenType> {
    Some(match (first, second?) {
        ('*', '*') => TokenType::DoubleStar,
        ('.', '.') => TokenType::DoubleDot,
        ('/', '=') => TokenType::NotEquals,
        (':', '=') => TokenType::Assign,
        ('<', '=') => TokenType::LessThanOrEqual,
        ('<', '<') => TokenType::LeftLabelBracket,
        ('<', '>') => TokenType::Box,
        ('=', '>') => TokenType::Arrow,
        ('>', '=') => TokenType::GreaterThanOrEqual,
        ('>', '>') => TokenType::RightLabelBracket,
        _ => return None,
    })
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn scan_line(text: &str) -> Vec<Token> {
        let mut cursor = LineCursor::new();
        cursor.load_line(text);

        let mut tokens = Vec::new();
        while let Some(token) = cursor.scan_token() {
            tokens.push(token);
        }
        tokens
    }

    fn single(text: &str) -> Token {
        let tokens = scan_line(text);
        assert_eq!(tokens.len(), 1, "{text:?} gave {tokens:#?}");
        tokens.into_iter().next().unwrap()
    }

    #[rstest]
    #[case("&", TokenType::Ampersand, 1)]
    #[case("(", TokenType::LeftParenthesis, 1)]
    #[case(")", TokenType::RightParenthesis, 1)]
    #[case("*", TokenType::Star, 1)]
    #[case("**", TokenType::DoubleStar, 2)]
    #[case("+", TokenType::Plus, 1)]
    #[case(",", TokenType::Comma, 1)]
    #[case("-", TokenType::Minus, 1)]
    #[case(".", TokenType::Dot, 1)]
    #[case("..", TokenType::DoubleDot, 2)]
    #[case("/", TokenType::Slash, 1)]
    #[case("/=", TokenType::NotEquals, 2)]
    #[case(":", TokenType::Colon, 1)]
    #[case(":=", TokenType::Assign, 2)]
    #[case(";", TokenType::Semicolon, 1)]
    #[case("<", TokenType::LessThan, 1)]
    #[case("<=", TokenType::LessThanOrEqual, 2)]
    #[case("<<", TokenType::LeftLabelBracket, 2)]
    #[case("<>", TokenType::Box, 2)]
    #[case("=", TokenType::Equals, 1)]
    #[case("=>", TokenType::Arrow, 2)]
    #[case(">", TokenType::GreaterThan, 1)]
    #[case(">=", TokenType::GreaterThanOrEqual, 2)]
    #[case(">>", TokenType::RightLabelBracket, 2)]
    #[case("|", TokenType::Bar, 1)]
    #[case("'", TokenType::Tick, 1)]
    fn delimiter(#[case] input: &str, #[case] kind: TokenType, #[case] length: usize) {
        assert_eq!(single(input), Token::new(kind, 1, 0, length, None));
    }

    #[rstest]
    #[case("<-", &[TokenType::LessThan, TokenType::Minus])]
    #[case(":==", &[TokenType::Assign, TokenType::Equals])]
    #[case("...", &[TokenType::DoubleDot, TokenType::Dot])]
    #[case("***", &[TokenType::DoubleStar, TokenType::Star])]
    #[case("=>=", &[TokenType::Arrow, TokenType::Equals])]
    #[case("<<>>", &[TokenType::LeftLabelBracket, TokenType::RightLabelBracket])]
    #[case("/ =", &[TokenType::Slash, TokenType::Equals])]
    fn delimiter_sequence(#[case] input: &str, #[case] expected: &[TokenType]) {
        let kinds: Vec<_> = scan_line(input).into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, expected);
    }

    #[test]
    fn comment_runs_to_end_of_line() {
        assert_eq!(
            scan_line("x -- note: 'a' \"b\""),
            vec![
                Token::new(TokenType::Identifier, 1, 0, 1, Some("x".into())),
                Token::new(TokenType::Comment, 1, 2, 16, Some(" note: 'a' \"b\"".into())),
            ]
        );
        assert_eq!(single("--"), Token::new(TokenType::Comment, 1, 0, 2, Some(String::new())));
    }

    #[rstest]
    #[case("\"\"", "", 2)]
    #[case("\"hello\"", "hello", 7)]
    #[case("\"a\"\"b\"", "a\"b", 6)]
    #[case("\"\"\"\"", "\"", 4)]
    #[case("\"tab\there\"", "tab\there", 10)]
    #[case("\"héllo\"", "héllo", 7)]
    fn string_literal(#[case] input: &str, #[case] value: &str, #[case] length: usize) {
        assert_eq!(single(input), Token::new(TokenType::String, 1, 0, length, Some(value.into())));
    }

    #[test]
    fn unterminated_string() {
        let tokens = scan_line("X := \"abc");
        assert_eq!(
            tokens.last(),
            Some(&Token::new(TokenType::Invalid, 1, 5, 4, Some("non terminated string".into())))
        );
    }

    #[rstest]
    #[case("'a'", "a")]
    #[case("'''", "'")]
    #[case("' '", " ")]
    #[case("'\"'", "\"")]
    fn character_literal(#[case] input: &str, #[case] value: &str) {
        assert_eq!(single(input), Token::new(TokenType::Character, 1, 0, 3, Some(value.into())));
    }

    #[test]
    fn attribute_after_tick() {
        assert_eq!(
            scan_line("A'Range"),
            vec![
                Token::new(TokenType::Identifier, 1, 0, 1, Some("A".into())),
                Token::new(TokenType::Tick, 1, 1, 1, None),
                Token::new(TokenType::Attribute, 1, 2, 5, Some("Range".into())),
            ]
        );
        assert_eq!(single("Range"), Token::new(TokenType::Range, 1, 0, 5, None));
    }

    #[test]
    fn attribute_after_tick_and_whitespace() {
        let kinds: Vec<_> = scan_line("X' First").into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, [TokenType::Identifier, TokenType::Tick, TokenType::Attribute]);
    }

    #[rstest]
    #[case("Integer", TokenType::Identifier)]
    #[case("my_var_2", TokenType::Identifier)]
    #[case("Ünïcode", TokenType::Identifier)]
    #[case("BEGIN", TokenType::Begin)]
    #[case("end", TokenType::End)]
    #[case("Some", TokenType::Some)]
    fn identifier_or_keyword(#[case] input: &str, #[case] kind: TokenType) {
        let token = single(input);
        assert_eq!(token.kind, kind);
        assert_eq!(token.length, input.chars().count());
    }

    #[rstest]
    #[case("42", 2)]
    #[case("16#FF#", 6)]
    #[case("1.0E+3", 6)]
    fn number(#[case] input: &str, #[case] length: usize) {
        assert_eq!(single(input), Token::new(TokenType::Number, 1, 0, length, Some(input.into())));
    }

    #[test]
    fn malformed_number_continues() {
        let tokens = scan_line("1__2");
        assert_eq!(tokens[0], Token::new(TokenType::Invalid, 1, 0, 2, Some("expecting digit".into())));
        assert_eq!(tokens[1], Token::new(TokenType::Invalid, 1, 2, 1, Some("unexpected character '_'".into())));
        assert_eq!(tokens[2], Token::new(TokenType::Number, 1, 3, 1, Some("2".into())));
    }

    #[rstest]
    #[case("?", '?')]
    #[case("#", '#')]
    #[case("[", '[')]
    #[case("_x", '_')]
    #[case("€", '€')]
    fn unexpected_character(#[case] input: &str, #[case] ch: char) {
        let tokens = scan_line(input);
        assert_eq!(tokens[0], Token::new(TokenType::Invalid, 1, 0, 1, Some(format!("unexpected character '{ch}'"))));
    }

    #[test]
    fn errors_are_recorded() {
        let mut cursor = LineCursor::new();
        cursor.load_line("a ? \"b");
        while cursor.scan_token().is_some() {}

        assert_eq!(cursor.errors(), &[
            LexerError { line: 1, column: 2, length: 1, kind: LexerErrorKind::UnexpectedCharacter { ch: '?' } },
            LexerError { line: 1, column: 4, length: 2, kind: LexerErrorKind::UnterminatedString },
        ]);
    }

    #[test]
    fn whitespace_only_line() {
        let mut cursor = LineCursor::new();
        cursor.load_line(" \t  ");
        assert_eq!(cursor.scan_token(), None);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.column(), 4);
    }

    #[test]
    fn tick_state_survives_line_change() {
        let mut cursor = LineCursor::new();
        cursor.load_line("X'");
        while cursor.scan_token().is_some() {}
        assert_eq!(cursor.last_kind(), TokenType::Tick);

        cursor.load_line("Length");
        let token = cursor.scan_token().unwrap();
        assert_eq!(token, Token::new(TokenType::Attribute, 2, 0, 6, Some("Length".into())));
    }

    #[test]
    fn reset_clears_everything() {
        let mut cursor = LineCursor::new();
        cursor.load_line("'?");
        while cursor.scan_token().is_some() {}
        cursor.reset();

        assert_eq!(cursor.line_number(), 0);
        assert_eq!(cursor.column(), 0);
        assert_eq!(cursor.last_kind(), TokenType::Invalid);
        assert!(cursor.errors().is_empty());
        assert!(cursor.is_exhausted());
    }
}
