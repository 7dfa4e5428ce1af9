// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use strum::{EnumCount, EnumIter, FromRepr, IntoEnumIterator, IntoStaticStr};

/// The lexical category of a [`Token`](super::Token).
///
/// The ordinals are part of the public contract: highlighters store them as
/// plain integers and look them up again with [`token_name`]. Keywords and
/// delimiters each occupy one contiguous range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(EnumCount, EnumIter, FromRepr, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum TokenType {
    #[strum(serialize = "?")]
    Invalid,

    Abort,
    Abs,
    Abstract,
    Accept,
    Access,
    Aliased,
    All,
    And,
    Array,
    At,
    Begin,
    Body,
    Case,
    Constant,
    Declare,
    Delay,
    Delta,
    Digits,
    Do,
    Else,
    Elsif,
    End,
    Entry,
    Exception,
    Exit,
    For,
    Function,
    Generic,
    Goto,
    If,
    In,
    Interface,
    Is,
    Limited,
    Loop,
    Mod,
    New,
    Not,
    Null,
    Of,
    Or,
    Others,
    Out,
    Overriding,
    Package,
    Pragma,
    Private,
    Procedure,
    Protected,
    Raise,
    Range,
    Record,
    Rem,
    Renames,
    Requeue,
    Return,
    Reverse,
    Select,
    Separate,
    Some,
    Subtype,
    Synchronized,
    Tagged,
    Task,
    Terminate,
    Then,
    Type,
    Until,
    Use,
    When,
    While,
    With,
    Xor,

    #[strum(serialize = "Colon")]
    Colon,
    #[strum(serialize = "Comma")]
    Comma,
    #[strum(serialize = "Dot")]
    Dot,
    #[strum(serialize = "Semicolon")]
    Semicolon,
    #[strum(serialize = "Tick")]
    Tick,
    #[strum(serialize = "LParen")]
    LeftParenthesis,
    #[strum(serialize = "RParen")]
    RightParenthesis,
    #[strum(serialize = "Ampers")]
    Ampersand,
    #[strum(serialize = "Bar")]
    Bar,
    #[strum(serialize = "Eq")]
    Equals,
    #[strum(serialize = "Neq")]
    NotEquals,
    #[strum(serialize = "Lt")]
    LessThan,
    #[strum(serialize = "Leq")]
    LessThanOrEqual,
    #[strum(serialize = "Geq")]
    GreaterThanOrEqual,
    #[strum(serialize = "Gt")]
    GreaterThan,
    #[strum(serialize = "Plus")]
    Plus,
    #[strum(serialize = "Minus")]
    Minus,
    #[strum(serialize = "Star")]
    Star,
    #[strum(serialize = "Slash")]
    Slash,
    #[strum(serialize = "Arrow")]
    Arrow,
    #[strum(serialize = "Assig")]
    Assign,
    #[strum(serialize = "DoubleDot")]
    DoubleDot,
    #[strum(serialize = "DoubleStar")]
    DoubleStar,
    #[strum(serialize = "LLBrack")]
    LeftLabelBracket,
    #[strum(serialize = "RLBrack")]
    RightLabelBracket,
    #[strum(serialize = "Box")]
    Box,

    #[strum(serialize = "Number")]
    Number,
    #[strum(serialize = "Character")]
    Character,
    #[strum(serialize = "String")]
    String,
    #[strum(serialize = "Identifier")]
    Identifier,
    #[strum(serialize = "Attribute")]
    Attribute,

    #[strum(serialize = "Comment")]
    Comment,
    #[strum(serialize = "EOF")]
    EndOfInput,
}

impl TokenType {
    pub const FIRST_KEYWORD: Self = Self::Abort;
    pub const LAST_KEYWORD: Self = Self::Xor;
    pub const FIRST_DELIMITER: Self = Self::Colon;
    pub const LAST_DELIMITER: Self = Self::Box;

    pub fn iter_variants() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn keywords() -> impl Iterator<Item = Self> {
        Self::iter().filter(|ty| ty.is_keyword())
    }

    #[must_use]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::from_repr(ordinal)
    }

    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn is_keyword(self) -> bool {
        (Self::FIRST_KEYWORD..=Self::LAST_KEYWORD).contains(&self)
    }

    #[must_use]
    pub fn is_delimiter(self) -> bool {
        (Self::FIRST_DELIMITER..=Self::LAST_DELIMITER).contains(&self)
    }

    #[must_use]
    pub fn is_number(self) -> bool {
        self == Self::Number
    }

    /// The mnemonic, e.g. `"abort"`, `"Arrow"` or `"EOF"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The glyph of a delimiter, e.g. `"=>"` for [`TokenType::Arrow`].
    #[must_use]
    pub const fn symbol(self) -> Option<&'static str> {
        Some(match self {
            Self::Colon => ":",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Semicolon => ";",
            Self::Tick => "'",
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::Ampersand => "&",
            Self::Bar => "|",
            Self::Equals => "=",
            Self::NotEquals => "/=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThanOrEqual => ">=",
            Self::GreaterThan => ">",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Arrow => "=>",
            Self::Assign => ":=",
            Self::DoubleDot => "..",
            Self::DoubleStar => "**",
            Self::LeftLabelBracket => "<<",
            Self::RightLabelBracket => ">>",
            Self::Box => "<>",
            _ => return None,
        })
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up the name of a token type by its ordinal. Delimiters are spelled as
/// their glyph when `as_symbol` is set. Unknown ordinals yield `"?"`.
#[must_use]
pub fn token_name(ordinal: u8, as_symbol: bool) -> &'static str {
    let Some(ty) = TokenType::from_ordinal(ordinal) else {
        return "?";
    };

    if as_symbol {
        if let Some(symbol) = ty.symbol() {
            return symbol;
        }
    }

    ty.name()
}
