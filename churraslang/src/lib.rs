// Copyright (C) 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod input;
mod keyword;
mod lexer;
mod parser;
mod pipeline;
mod token;
mod type_;
mod util;
mod value;

pub use self::{
    input::{InputProvider, StdinInput},
    keyword::Keyword,
    lexer::{LexError, Lexer},
    parser::{ExecuteError, ParseError, Parser, RuntimeError},
    pipeline::{compile, compile_with_input, CompilationReport, Stage, Status},
    token::{Punctuator, Token, TokenKind},
    type_::PrimitiveType,
    util::SourceLocation,
    value::Value,
};
