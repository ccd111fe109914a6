// Copyright (C) 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::collections::HashMap;

use strum::AsRefStr;

use crate::{
    InputProvider, Keyword, PrimitiveType, Punctuator, SourceLocation, Token, TokenKind, Value,
};

/// Recursive-descent recognizer that evaluates the program while it parses.
/// There is no tree: expression rules return the computed [`Value`] and
/// statement rules mutate the symbol table or the output list directly.
pub struct Parser<'tokens, I> {
    tokens: &'tokens [Token],
    cursor: usize,

    types: HashMap<String, PrimitiveType>,
    values: HashMap<String, Value>,
    outputs: Vec<String>,
    input: I,

    end_of_file_token: Token,
}

impl<'tokens, I: InputProvider> Parser<'tokens, I> {
    pub fn new(tokens: &'tokens [Token], input: I) -> Self {
        let end = tokens.last()
            .map(|token| token.location)
            .unwrap_or_else(|| SourceLocation::new(0, 1, 1));

        Self {
            tokens,
            cursor: 0,
            types: HashMap::new(),
            values: HashMap::new(),
            outputs: Vec::new(),
            input,
            end_of_file_token: Token {
                kind: TokenKind::EndOfFile,
                lexeme: String::new(),
                location: end,
            },
        }
    }

    /// Runs the whole program and returns the lines produced by `SERVIR`, in
    /// order. The first syntactic or semantic fault aborts the run.
    pub fn parse(mut self) -> Result<Vec<String>, ExecuteError> {
        self.expect(&[TokenKind::Keyword(Keyword::IniciarChurras)])?;
        self.parse_declarations()?;
        self.parse_statements()?;
        self.expect(&[TokenKind::Keyword(Keyword::FimChurras)])?;

        Ok(self.outputs)
    }

    fn parse_declarations(&mut self) -> Result<(), ExecuteError> {
        if self.peek(0).kind != TokenKind::Keyword(Keyword::Despensa) {
            return Ok(());
        }

        _ = self.consume_token();

        while self.peek(0).kind == TokenKind::Identifier {
            let variable = self.consume_token();
            self.expect(&[TokenKind::Punctuator(Punctuator::Colon)])?;

            let specifier = self.expect(&[
                TokenKind::Keyword(Keyword::Picanha),
                TokenKind::Keyword(Keyword::Arroz),
            ])?;
            let declared = if specifier.kind == TokenKind::Keyword(Keyword::Picanha) {
                PrimitiveType::Integer
            } else {
                PrimitiveType::Real
            };

            self.expect(&[TokenKind::Punctuator(Punctuator::Semicolon)])?;

            // re-declaration changes the type but keeps any value already set
            self.types.insert(variable.lexeme.clone(), declared);
            self.values.entry(variable.lexeme).or_insert_with(|| declared.zero_value());
        }

        Ok(())
    }

    fn parse_statements(&mut self) -> Result<(), ExecuteError> {
        self.expect(&[TokenKind::Keyword(Keyword::Cozinhar)])?;

        loop {
            match self.peek(0).kind {
                TokenKind::Identifier => self.parse_assignment()?,
                TokenKind::Keyword(Keyword::Servir) => self.parse_output()?,
                TokenKind::Keyword(Keyword::Provar) => self.parse_input()?,

                // anything else ends the statement list silently; the caller
                // then expects `FIM_CHURRAS` and reports the mismatch there
                _ => break,
            }
        }

        Ok(())
    }

    fn parse_assignment(&mut self) -> Result<(), ExecuteError> {
        let variable = self.expect(&[TokenKind::Identifier])?;
        self.expect(&[TokenKind::Punctuator(Punctuator::Assignment)])?;
        let value = self.parse_expression()?;
        self.expect(&[TokenKind::Punctuator(Punctuator::Semicolon)])?;

        let Some(declared) = self.types.get(&variable.lexeme).copied() else {
            return Err(RuntimeError::UndeclaredVariable { variable }.into());
        };

        if value.is_string() {
            return Err(RuntimeError::StringAssignment { variable }.into());
        }

        let value = match (declared, value) {
            (PrimitiveType::Integer, Value::Real(real)) => Value::Integer(real as i64),
            (PrimitiveType::Real, Value::Integer(int)) => Value::Real(int as f64),
            (_, value) => value,
        };

        self.values.insert(variable.lexeme, value);
        Ok(())
    }

    fn parse_output(&mut self) -> Result<(), ExecuteError> {
        self.expect(&[TokenKind::Keyword(Keyword::Servir)])?;
        let value = self.parse_expression()?;
        self.expect(&[TokenKind::Punctuator(Punctuator::Semicolon)])?;

        self.outputs.push(value.to_string());
        Ok(())
    }

    fn parse_input(&mut self) -> Result<(), ExecuteError> {
        self.expect(&[TokenKind::Keyword(Keyword::Provar)])?;
        let variable = self.expect(&[TokenKind::Identifier])?;
        self.expect(&[TokenKind::Punctuator(Punctuator::Semicolon)])?;

        let Some(declared) = self.types.get(&variable.lexeme).copied() else {
            return Err(RuntimeError::UndeclaredVariable { variable }.into());
        };

        let Some(input) = self.input.request(&variable.lexeme, declared) else {
            // no value given: the variable keeps its previous value
            return Ok(());
        };

        let value = match declared {
            PrimitiveType::Integer => input.trim().parse().ok().map(Value::Integer),
            PrimitiveType::Real => input.trim().parse().ok().map(Value::Real),
        };

        let Some(value) = value else {
            return Err(RuntimeError::InvalidInput { variable, input, expected: declared }.into());
        };

        self.values.insert(variable.lexeme, value);
        Ok(())
    }

    fn parse_expression(&mut self) -> Result<Value, ExecuteError> {
        let mut value = self.parse_term()?;

        loop {
            let op = match self.peek(0).kind {
                TokenKind::Punctuator(Punctuator::PlusSign) => BinaryOperator::Add,
                TokenKind::Punctuator(Punctuator::HyphenMinus) => BinaryOperator::Subtract,
                _ => break,
            };

            let operator = self.consume_token();
            let rhs = self.parse_term()?;
            value = Self::evaluate_binary(&operator, op, value, rhs)?;
        }

        Ok(value)
    }

    fn parse_term(&mut self) -> Result<Value, ExecuteError> {
        let mut value = self.parse_factor()?;

        loop {
            let op = match self.peek(0).kind {
                TokenKind::Punctuator(Punctuator::Asterisk) => BinaryOperator::Multiply,
                TokenKind::Punctuator(Punctuator::Solidus) => BinaryOperator::Divide,
                _ => break,
            };

            let operator = self.consume_token();
            let rhs = self.parse_factor()?;
            value = Self::evaluate_binary(&operator, op, value, rhs)?;
        }

        Ok(value)
    }

    fn parse_factor(&mut self) -> Result<Value, ExecuteError> {
        let token = self.consume_token();

        match token.kind {
            TokenKind::Integer => match token.lexeme.parse() {
                Ok(int) => Ok(Value::Integer(int)),
                Err(_) => Err(RuntimeError::NumberOutOfRange { literal: token }.into()),
            },

            TokenKind::Real => match token.lexeme.parse() {
                Ok(real) => Ok(Value::Real(real)),
                Err(_) => Err(RuntimeError::NumberOutOfRange { literal: token }.into()),
            },

            TokenKind::StringLiteral => Ok(Value::String(token.lexeme)),

            TokenKind::Identifier => match self.values.get(&token.lexeme) {
                Some(value) => Ok(value.clone()),
                None => Err(RuntimeError::UndeclaredVariable { variable: token }.into()),
            },

            TokenKind::Punctuator(Punctuator::LeftParenthesis) => {
                let value = self.parse_expression()?;
                self.expect(&[TokenKind::Punctuator(Punctuator::RightParenthesis)])?;
                Ok(value)
            }

            _ => Err(ParseError::InvalidExpression { found: token }.into()),
        }
    }

    fn evaluate_binary(operator: &Token, op: BinaryOperator, lhs: Value, rhs: Value) -> Result<Value, ExecuteError> {
        if lhs.is_string() || rhs.is_string() {
            return Err(RuntimeError::InvalidStringOperand { operator: operator.clone() }.into());
        }

        if op == BinaryOperator::Divide && rhs.is_zero() {
            return Err(RuntimeError::DivisionByZero { operator: operator.clone() }.into());
        }

        Ok(match (lhs, rhs) {
            (Value::Integer(lhs), Value::Integer(rhs)) => match op {
                BinaryOperator::Add => Value::Integer(lhs + rhs),
                BinaryOperator::Subtract => Value::Integer(lhs - rhs),
                BinaryOperator::Multiply => Value::Integer(lhs * rhs),

                // division always yields a real, even between integers
                BinaryOperator::Divide => Value::Real(lhs as f64 / rhs as f64),
            },

            (lhs, rhs) => {
                let (lhs, rhs) = (lhs.as_real(), rhs.as_real());
                match op {
                    BinaryOperator::Add => Value::Real(lhs + rhs),
                    BinaryOperator::Subtract => Value::Real(lhs - rhs),
                    BinaryOperator::Multiply => Value::Real(lhs * rhs),
                    BinaryOperator::Divide => Value::Real(lhs / rhs),
                }
            }
        })
    }

    fn peek(&self, k: usize) -> &Token {
        self.tokens.get(self.cursor + k).unwrap_or(&self.end_of_file_token)
    }

    fn consume_token(&mut self) -> Token {
        let token = self.peek(0).clone();
        self.cursor += 1;
        token
    }

    fn expect(&mut self, expected: &[TokenKind]) -> Result<Token, ParseError> {
        let token = self.peek(0);

        if expected.contains(&token.kind) {
            return Ok(self.consume_token());
        }

        let expected = expected.iter()
            .map(TokenKind::name)
            .collect::<Vec<_>>()
            .join(", ");

        Err(ParseError::ExpectedToken {
            found: token.clone(),
            expected,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error, AsRefStr)]
pub enum ParseError {
    #[error("Esperado [{expected}], mas veio {}", found.kind)]
    ExpectedToken { found: Token, expected: String },

    #[error("Expressão inválida")]
    InvalidExpression { found: Token },
}

impl ParseError {
    #[must_use]
    pub fn token(&self) -> &Token {
        match self {
            Self::ExpectedToken { found, .. } => found,
            Self::InvalidExpression { found } => found,
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error, AsRefStr)]
pub enum RuntimeError {
    #[error("Variável '{}' não declarada.", variable.lexeme)]
    UndeclaredVariable { variable: Token },

    #[error("Não é possível atribuir String a uma variável numérica.")]
    StringAssignment { variable: Token },

    #[error("Operação aritmética inválida sobre String.")]
    InvalidStringOperand { operator: Token },

    #[error("Divisão por zero.")]
    DivisionByZero { operator: Token },

    #[error("Entrada inválida '{input}' para variável do tipo '{expected}'.")]
    InvalidInput { variable: Token, input: String, expected: PrimitiveType },

    #[error("Número '{}' fora do intervalo representável.", literal.lexeme)]
    NumberOutOfRange { literal: Token },
}

impl RuntimeError {
    #[must_use]
    pub fn token(&self) -> &Token {
        match self {
            Self::UndeclaredVariable { variable } => variable,
            Self::StringAssignment { variable } => variable,
            Self::InvalidStringOperand { operator } => operator,
            Self::DivisionByZero { operator } => operator,
            Self::InvalidInput { variable, .. } => variable,
            Self::NumberOutOfRange { literal } => literal,
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ExecuteError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl ExecuteError {
    #[must_use]
    pub fn token(&self) -> &Token {
        match self {
            Self::Parse(error) => error.token(),
            Self::Runtime(error) => error.token(),
        }
    }
}
