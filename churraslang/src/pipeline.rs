// Copyright (C) 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use serde::Serialize;
use strum::IntoStaticStr;

use crate::{ExecuteError, InputProvider, LexError, Lexer, Parser, StdinInput, Token, TokenKind};

/// Compiles and executes the program, prompting `PROVAR` statements on
/// standard input.
pub fn compile(source: &str) -> CompilationReport {
    compile_with_input(source, StdinInput)
}

/// Compiles and executes the program with an injected input channel. All
/// failures are folded into the report; this function never panics on bad
/// source text.
pub fn compile_with_input<I: InputProvider>(source: &str, input: I) -> CompilationReport {
    let tokens = match Lexer::new(source).tokenize() {
        Ok(tokens) => tokens,
        Err(error) => {
            log::debug!("falha léxica: {error}");
            return CompilationReport::lexical_error(error);
        }
    };

    log::debug!("{} tokens reconhecidos", tokens.len());

    let descriptions = tokens.iter()
        .filter(|token| token.kind != TokenKind::EndOfFile)
        .map(describe)
        .collect();

    match Parser::new(&tokens, input).parse() {
        Ok(outputs) => CompilationReport::success(descriptions, outputs),
        Err(error) => {
            log::debug!("falha na execução: {error}");
            CompilationReport::execute_error(descriptions, error)
        }
    }
}

fn describe(token: &Token) -> String {
    format!(
        "{:<20} | {:<25} | L: {}, C: {}",
        token.kind.name(),
        token.lexeme,
        token.line(),
        token.column(),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoStaticStr, Serialize)]
pub enum Stage {
    #[strum(serialize = "Léxico")]
    Lexical,
    #[strum(serialize = "Sintático")]
    Syntactic,
    #[strum(serialize = "Semântico")]
    Semantic,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).into())
    }
}

/// The outcome of one compilation, ready for any front end to render: the
/// token table, the program output and, on failure, the stage, message and
/// anchoring token for highlighting.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompilationReport {
    pub status: Status,
    pub tokens: Vec<String>,
    pub output: String,
    pub error_stage: Option<Stage>,
    pub error_message: String,
    pub error_token: Option<Token>,
}

impl CompilationReport {
    const SUCCESS_MESSAGE: &'static str = "Compilado e executado com sucesso!";
    const EMPTY_OUTPUT: &'static str = "<nenhuma>";

    fn success(tokens: Vec<String>, outputs: Vec<String>) -> Self {
        let output = if outputs.is_empty() {
            Self::EMPTY_OUTPUT.to_string()
        } else {
            outputs.join("\n")
        };

        Self {
            status: Status::Success,
            tokens,
            output,
            error_stage: None,
            error_message: Self::SUCCESS_MESSAGE.to_string(),
            error_token: None,
        }
    }

    fn lexical_error(error: LexError) -> Self {
        Self {
            status: Status::Error,
            tokens: Vec::new(),
            output: String::new(),
            error_stage: Some(Stage::Lexical),
            error_message: error.to_string(),
            error_token: None,
        }
    }

    fn execute_error(tokens: Vec<String>, error: ExecuteError) -> Self {
        let stage = match &error {
            ExecuteError::Parse(..) => Stage::Syntactic,
            ExecuteError::Runtime(..) => Stage::Semantic,
        };

        Self {
            status: Status::Error,
            tokens,
            output: String::new(),
            error_stage: Some(stage),
            error_message: error.to_string(),
            error_token: Some(error.token().clone()),
        }
    }
}
