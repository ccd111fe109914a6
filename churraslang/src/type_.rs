// Copyright (C) 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use serde::Serialize;

use crate::Value;

/// The two declarable variable types: `PICANHA` (integer) and `ARROZ` (real).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum PrimitiveType {
    Integer,
    Real,
}

impl PrimitiveType {
    /// Declarations initialize their variable to this value.
    #[must_use]
    pub const fn zero_value(&self) -> Value {
        match self {
            Self::Integer => Value::Integer(0),
            Self::Real => Value::Real(0.0),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Integer => "int",
            Self::Real => "real",
        }
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
