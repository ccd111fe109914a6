// Copyright (C) 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::{BufRead, Write};

use crate::PrimitiveType;

/// Supplies the value for a `PROVAR` statement. Front ends inject their own
/// channel (dialog box, scripted answers); `None` means no value was given
/// and the variable keeps its previous value.
pub trait InputProvider {
    fn request(&mut self, variable: &str, declared: PrimitiveType) -> Option<String>;
}

impl<I: InputProvider + ?Sized> InputProvider for &mut I {
    fn request(&mut self, variable: &str, declared: PrimitiveType) -> Option<String> {
        (**self).request(variable, declared)
    }
}

/// Default provider: prompts on standard output and reads one line from
/// standard input. End of input yields `None`.
pub struct StdinInput;

impl InputProvider for StdinInput {
    fn request(&mut self, variable: &str, declared: PrimitiveType) -> Option<String> {
        print!("PROVAR > Digite um valor para '{variable}' (tipo: {declared}): ");
        _ = std::io::stdout().flush();

        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

/// No input channel at all; every `PROVAR` is a no-op.
impl InputProvider for () {
    fn request(&mut self, _variable: &str, _declared: PrimitiveType) -> Option<String> {
        None
    }
}
