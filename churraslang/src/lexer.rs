// Copyright (C) 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::str::CharIndices;

use crate::{Keyword, Punctuator, SourceLocation, Token, TokenKind};

pub struct Lexer<'source_code> {
    input: &'source_code str,
    chars: CharIndices<'source_code>,

    current: Option<(SourceLocation, char)>,
    line: usize,
    column: usize,
}

impl<'source_code> Lexer<'source_code> {
    pub fn new(input: &'source_code str) -> Self {
        Self {
            input,
            chars: input.char_indices(),
            current: None,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the whole input, ending with the `EOF` token. The first
    /// malformed lexeme aborts the run.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_end_of_file = token.kind == TokenKind::EndOfFile;
            tokens.push(token);

            if is_end_of_file {
                break;
            }
        }

        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments();

        let Some(ch) = self.peek_char() else {
            return Ok(Token {
                kind: TokenKind::EndOfFile,
                lexeme: String::new(),
                location: self.current_location(),
            });
        };

        match ch {
            '"' => self.consume_string(),
            '0'..='9' => self.consume_number(),
            c if c.is_alphabetic() || c == '_' => Ok(self.consume_identifier_or_keyword()),

            '=' => Ok(self.consume_single_char_token(Punctuator::Assignment)),
            '+' => Ok(self.consume_single_char_token(Punctuator::PlusSign)),
            '-' => Ok(self.consume_single_char_token(Punctuator::HyphenMinus)),
            '*' => Ok(self.consume_single_char_token(Punctuator::Asterisk)),
            '/' => Ok(self.consume_single_char_token(Punctuator::Solidus)),
            '(' => Ok(self.consume_single_char_token(Punctuator::LeftParenthesis)),
            ')' => Ok(self.consume_single_char_token(Punctuator::RightParenthesis)),
            ';' => Ok(self.consume_single_char_token(Punctuator::Semicolon)),
            ':' => Ok(self.consume_single_char_token(Punctuator::Colon)),

            symbol => {
                let location = self.current_location();
                Err(LexError::InvalidSymbol { symbol, location })
            }
        }
    }

    fn consume_single_char_token(&mut self, punctuator: Punctuator) -> Token {
        let location = self.current_location();

        self.consume_char();

        Token {
            kind: TokenKind::Punctuator(punctuator),
            lexeme: punctuator.as_str().to_string(),
            location,
        }
    }

    fn consume_string(&mut self) -> Result<Token, LexError> {
        let location = self.current_location();

        self.consume_char();

        let interior_begin = self.current_location().offset();

        loop {
            match self.peek_char() {
                None => return Err(LexError::UnterminatedString { location }),
                Some('"') => break,
                Some(_) => self.consume_char(),
            }
        }

        let interior_end = self.current_location().offset();
        let lexeme = self.input[interior_begin..interior_end].to_string();

        self.consume_char();

        Ok(Token {
            kind: TokenKind::StringLiteral,
            lexeme,
            location,
        })
    }

    fn consume_identifier_or_keyword(&mut self) -> Token {
        let location = self.current_location();

        loop {
            let Some(c) = self.peek_char() else {
                break;
            };

            if !is_identifier_char(c) {
                break;
            }

            self.consume_char();
        }

        let end = self.current_location();
        let lexeme = &self.input[location.offset()..end.offset()];

        let kind = match Keyword::parse(lexeme) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        };

        Token {
            kind,
            lexeme: lexeme.to_string(),
            location,
        }
    }

    fn consume_number(&mut self) -> Result<Token, LexError> {
        let location = self.current_location();

        self.consume_digits();

        let mut kind = TokenKind::Integer;
        if self.peek_char() == Some('.') {
            self.consume_char();

            if !self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                return Err(LexError::MalformedRealNumber { location });
            }

            self.consume_digits();
            kind = TokenKind::Real;
        }

        let end = self.current_location();

        Ok(Token {
            kind,
            lexeme: self.input[location.offset()..end.offset()].to_string(),
            location,
        })
    }

    fn consume_digits(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_ascii_digit() {
                break;
            }

            self.consume_char();
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(c) = self.peek_char() {
            if c == '#' {
                self.consume_until_end_of_line();
                continue;
            }

            if !matches!(c, ' ' | '\t' | '\r' | '\n') {
                break;
            }

            self.consume_char();
        }
    }

    fn consume_until_end_of_line(&mut self) {
        while let Some(c) = self.peek_char() {
            if c == '\n' {
                break;
            }

            self.consume_char();
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        if let Some((_, c)) = self.current {
            return Some(c);
        }

        self.current = self.chars.next()
            .map(|(offset, char)| {
                let location = SourceLocation::new(offset, self.line, self.column);

                if char == '\n' {
                    self.line += 1;
                    self.column = 1;
                } else {
                    self.column += 1;
                }

                (location, char)
            });
        Some(self.current?.1)
    }

    fn consume_char(&mut self) {
        self.current = None;
        _ = self.peek_char();
    }

    fn current_location(&mut self) -> SourceLocation {
        _ = self.peek_char();
        match self.current {
            Some((location, _)) => location,
            None => SourceLocation::new(self.input.len(), self.line, self.column),
        }
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("String não terminada na {location}.")]
    UnterminatedString { location: SourceLocation },

    #[error("Número real malformado na {location}: esperado dígitos após '.'")]
    MalformedRealNumber { location: SourceLocation },

    #[error("Símbolo inválido '{symbol}' na {location}")]
    InvalidSymbol { symbol: char, location: SourceLocation },
}

impl LexError {
    #[must_use]
    pub fn location(&self) -> SourceLocation {
        match self {
            Self::UnterminatedString { location } => *location,
            Self::MalformedRealNumber { location } => *location,
            Self::InvalidSymbol { location, .. } => *location,
        }
    }
}
