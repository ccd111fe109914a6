// Copyright (C) 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SourceLocation {
    offset: usize,
    line: usize,
    column: usize,
}

impl SourceLocation {
    #[must_use]
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Zero-based byte index
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// One-based line number
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// One-based column number
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }
}

impl From<SourceLocation> for (usize, usize) {
    fn from(value: SourceLocation) -> Self {
        (value.line(), value.column())
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("linha {}, coluna {}", self.line(), self.column()))
    }
}
