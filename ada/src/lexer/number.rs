// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use thiserror::Error;

/// A successfully recognized numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericLiteral {
    pub length: usize,
    pub has_decimal_point: bool,
    pub has_exponent: bool,
    pub is_based: bool,
}

/// A numeric literal that violates the grammar. `length` is the number of
/// characters consumed before the violation and is always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct NumberError {
    pub length: usize,
    pub kind: NumberErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumberErrorKind {
    #[error("expecting digit")]
    ExpectingDigit,

    #[error("expecting extended digit")]
    ExpectingExtendedDigit,

    #[error("expecting #")]
    ExpectingHash,

    #[error("expecting plus, minus or digit")]
    ExpectingExponent,
}

/// Recognizes a decimal or based literal starting at a digit:
///
/// ```text
/// decimal_literal ::= numeral ['.' numeral] [exponent]
/// based_literal   ::= numeral '#' based_numeral ['.' based_numeral] '#' [exponent]
/// numeral         ::= digit {['_'] digit}
/// based_numeral   ::= extended_digit {['_'] extended_digit}
/// exponent        ::= ('e'|'E') [('+'|'-')] numeral
/// ```
///
/// Whether the value of each extended digit is below the base is not checked.
pub struct NumberParser<'line> {
    line: &'line [char],
    start: usize,
    offset: usize,
    has_decimal_point: bool,
    has_exponent: bool,
    is_based: bool,
}

impl<'line> NumberParser<'line> {
    #[must_use]
    pub fn new(line: &'line [char], start: usize) -> Self {
        Self {
            line,
            start,
            offset: 0,
            has_decimal_point: false,
            has_exponent: false,
            is_based: false,
        }
    }

    pub fn parse(&mut self) -> Result<NumericLiteral, NumberError> {
        self.offset = 0;
        self.has_decimal_point = false;
        self.has_exponent = false;
        self.is_based = false;

        self.numeral()?;

        if self.peek() == Some('#') {
            self.is_based = true;
            self.offset += 1;
            self.based_numeral()?;

            if self.peek() == Some('.') {
                self.has_decimal_point = true;
                self.offset += 1;
                self.based_numeral()?;
            }

            if self.peek() != Some('#') {
                return Err(self.error(NumberErrorKind::ExpectingHash));
            }
            self.offset += 1;
        } else if self.peek() == Some('.') && self.peek_at(1) != Some('.') {
            self.has_decimal_point = true;
            self.offset += 1;
            self.numeral()?;
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            self.has_exponent = true;
            self.offset += 1;
            self.exponent()?;
        }

        Ok(NumericLiteral {
            length: self.offset,
            has_decimal_point: self.has_decimal_point,
            has_exponent: self.has_exponent,
            is_based: self.is_based,
        })
    }

    fn numeral(&mut self) -> Result<(), NumberError> {
        self.digits(is_digit, NumberErrorKind::ExpectingDigit)
    }

    fn based_numeral(&mut self) -> Result<(), NumberError> {
        self.digits(is_extended_digit, NumberErrorKind::ExpectingExtendedDigit)?;

        // A letter or digit glued to the numeral can only be a digit out of range.
        match self.peek() {
            Some(c) if c.is_alphanumeric() => Err(self.error(NumberErrorKind::ExpectingExtendedDigit)),
            _ => Ok(()),
        }
    }

    /// `digit {['_'] digit}`, where an underscore must be followed by a digit.
    fn digits(&mut self, is_digit: fn(char) -> bool, kind: NumberErrorKind) -> Result<(), NumberError> {
        if !self.peek().is_some_and(is_digit) {
            return Err(self.error(kind));
        }
        self.offset += 1;

        loop {
            match self.peek() {
                Some('_') => {
                    self.offset += 1;
                    if !self.peek().is_some_and(is_digit) {
                        return Err(self.error(kind));
                    }
                    self.offset += 1;
                }

                Some(c) if is_digit(c) => self.offset += 1,

                _ => return Ok(()),
            }
        }
    }

    fn exponent(&mut self) -> Result<(), NumberError> {
        match self.peek() {
            Some('+' | '-') => {
                self.offset += 1;
                self.numeral()
            }

            Some(c) if is_digit(c) => self.numeral(),

            _ => Err(self.error(NumberErrorKind::ExpectingExponent)),
        }
    }

    fn error(&self, kind: NumberErrorKind) -> NumberError {
        NumberError {
            length: self.offset.max(1),
            kind,
        }
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, distance: usize) -> Option<char> {
        self.line.get(self.start + self.offset + distance).copied()
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_extended_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(input: &str) -> Result<NumericLiteral, NumberError> {
        let chars: Vec<char> = input.chars().collect();
        NumberParser::new(&chars, 0).parse()
    }

    fn literal(length: usize, has_decimal_point: bool, has_exponent: bool, is_based: bool) -> NumericLiteral {
        NumericLiteral { length, has_decimal_point, has_exponent, is_based }
    }

    #[rstest]
    #[case("0", literal(1, false, false, false))]
    #[case("123_456", literal(7, false, false, false))]
    #[case("123_456;", literal(7, false, false, false))]
    #[case("3.14159_26", literal(10, true, false, false))]
    #[case("1.0E+3", literal(6, true, true, false))]
    #[case("1.0e-3", literal(6, true, true, false))]
    #[case("1E6", literal(3, false, true, false))]
    #[case("16#FF#", literal(6, false, false, true))]
    #[case("16#ff#", literal(6, false, false, true))]
    #[case("2#1110_0000#", literal(12, false, false, true))]
    #[case("16#F.FF#E+2", literal(11, true, true, true))]
    #[case("16#E#E1", literal(7, false, true, true))]
    #[case("1..10", literal(1, false, false, false))]
    #[case("10)", literal(2, false, false, false))]
    fn parse_valid(#[case] input: &str, #[case] expected: NumericLiteral) {
        assert_eq!(parse(input), Ok(expected));
    }

    #[rstest]
    #[case("1__2", 2, NumberErrorKind::ExpectingDigit)]
    #[case("1_", 2, NumberErrorKind::ExpectingDigit)]
    #[case("1_a", 2, NumberErrorKind::ExpectingDigit)]
    #[case("1.", 2, NumberErrorKind::ExpectingDigit)]
    #[case("1.x", 2, NumberErrorKind::ExpectingDigit)]
    #[case("16#FG#", 4, NumberErrorKind::ExpectingExtendedDigit)]
    #[case("16##", 3, NumberErrorKind::ExpectingExtendedDigit)]
    #[case("16#F__F#", 5, NumberErrorKind::ExpectingExtendedDigit)]
    #[case("16#FF", 5, NumberErrorKind::ExpectingHash)]
    #[case("16#FF;", 5, NumberErrorKind::ExpectingHash)]
    #[case("1E", 2, NumberErrorKind::ExpectingExponent)]
    #[case("1e;", 2, NumberErrorKind::ExpectingExponent)]
    #[case("1E+", 3, NumberErrorKind::ExpectingDigit)]
    fn parse_invalid(#[case] input: &str, #[case] length: usize, #[case] kind: NumberErrorKind) {
        assert_eq!(parse(input), Err(NumberError { length, kind }));
    }

    #[test]
    fn parse_from_offset() {
        let chars: Vec<char> = "X := 42;".chars().collect();
        let result = NumberParser::new(&chars, 5).parse();
        assert_eq!(result, Ok(literal(2, false, false, false)));
    }

    #[test]
    fn error_messages() {
        assert_eq!(NumberErrorKind::ExpectingDigit.to_string(), "expecting digit");
        assert_eq!(NumberErrorKind::ExpectingExtendedDigit.to_string(), "expecting extended digit");
        assert_eq!(NumberErrorKind::ExpectingHash.to_string(), "expecting #");
        assert_eq!(NumberErrorKind::ExpectingExponent.to_string(), "expecting plus, minus or digit");
    }
}
