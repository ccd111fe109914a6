// Copyright (C) 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use strum::IntoStaticStr;

use crate::{Keyword, SourceLocation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, Serialize)]
pub enum Punctuator {
    #[strum(serialize = "OP_ATRIB")]
    Assignment,
    #[strum(serialize = "OP_SOMA")]
    PlusSign,
    #[strum(serialize = "OP_SUB")]
    HyphenMinus,
    #[strum(serialize = "OP_MULT")]
    Asterisk,
    #[strum(serialize = "OP_DIV")]
    Solidus,
    #[strum(serialize = "PARENT_ESQ")]
    LeftParenthesis,
    #[strum(serialize = "PARENT_DIR")]
    RightParenthesis,
    #[strum(serialize = "PONTO_VIRGULA")]
    Semicolon,
    #[strum(serialize = "DOIS_PONTOS")]
    Colon,
}

impl Punctuator {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Assignment => "=",
            Self::PlusSign => "+",
            Self::HyphenMinus => "-",
            Self::Asterisk => "*",
            Self::Solidus => "/",
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::Semicolon => ";",
            Self::Colon => ":",
        }
    }
}

impl Display for Punctuator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum TokenKind {
    Keyword(Keyword),
    Punctuator(Punctuator),

    Identifier,
    StringLiteral,
    Integer,
    Real,

    EndOfFile,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Keyword(keyword) => (*keyword).into(),
            Self::Punctuator(punctuator) => (*punctuator).into(),

            Self::Identifier => "ID",
            Self::StringLiteral => "STRING",
            Self::Integer => "NUM_INTEIRO",
            Self::Real => "NUM_REAL",

            Self::EndOfFile => "EOF",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub location: SourceLocation,
}

impl Token {
    #[must_use]
    pub fn line(&self) -> usize {
        self.location.line()
    }

    #[must_use]
    pub fn column(&self) -> usize {
        self.location.column()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}
