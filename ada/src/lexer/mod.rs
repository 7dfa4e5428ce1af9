// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod ada_version;
mod keyword;
mod lexer_error;
mod line_cursor;
mod number;
mod scanner;
mod token;
mod token_type;

pub use self::{
    ada_version::AdaVersion,
    keyword::{
        classify,
        is_ada05_keyword,
        is_ada12_keyword,
        is_ada83_keyword,
        is_ada95_keyword,
    },
    lexer_error::{
        LexerError,
        LexerErrorKind,
    },
    line_cursor::LineCursor,
    number::{
        NumberError,
        NumberErrorKind,
        NumberParser,
        NumericLiteral,
    },
    scanner::Scanner,
    token::Token,
    token_type::{
        token_name,
        TokenType,
    },
};
