// Copyright (C) 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::Serialize;
use strum::IntoEnumIterator;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[derive(strum::AsRefStr, strum::EnumIter, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Keyword {
    Arroz,
    Cozinhar,
    Despensa,
    FimChurras,
    IniciarChurras,
    Picanha,
    Provar,
    Servir,
}

impl Keyword {
    /// Keywords match case-insensitively; identifiers keep their source spelling.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.to_uppercase();

        Self::iter().find(|x| x.as_ref() == input)
    }
}
