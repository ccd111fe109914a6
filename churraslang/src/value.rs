// Copyright (C) 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Real(f64),
    String(String),
}

impl Value {
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(int) => *int == 0,
            Self::Real(real) => *real == 0.0,
            Self::String(..) => false,
        }
    }

    /// Numeric reading of the value. Strings have none and must be rejected
    /// before arithmetic; here they read as 0.0.
    #[must_use]
    pub fn as_real(&self) -> f64 {
        match self {
            Self::Integer(int) => *int as f64,
            Self::Real(real) => *real,
            Self::String(..) => 0.0,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(int) => int.fmt(f),

            // integral reals keep a decimal part, so `10 / 2` prints as `5.0`
            Self::Real(real) if real.is_finite() && real.fract() == 0.0 => {
                f.write_fmt(format_args!("{real:.1}"))
            }
            Self::Real(real) => real.fmt(f),

            Self::String(str) => str.fmt(f),
        }
    }
}
