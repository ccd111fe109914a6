// Copyright (C) 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::collections::VecDeque;

use churraslang::{compile_with_input, CompilationReport, InputProvider, PrimitiveType};

/// Input provider fed from a fixed script of answers, one per `PROVAR`
/// statement. Once the script runs out, every request yields no value.
pub struct ScriptedInput {
    answers: VecDeque<String>,
    requests: Vec<(String, PrimitiveType)>,
}

impl ScriptedInput {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|x| x.to_string()).collect(),
            requests: Vec::new(),
        }
    }

    /// The prompts issued so far, as (variable, declared type) pairs.
    pub fn requests(&self) -> &[(String, PrimitiveType)] {
        &self.requests
    }
}

impl InputProvider for ScriptedInput {
    fn request(&mut self, variable: &str, declared: PrimitiveType) -> Option<String> {
        self.requests.push((variable.to_string(), declared));
        self.answers.pop_front()
    }
}

pub fn compile_scripted(source: &str, answers: &[&str]) -> CompilationReport {
    compile_with_input(source, ScriptedInput::new(answers))
}

/// Compiles with no input channel at all; every `PROVAR` is a no-op.
pub fn compile_silent(source: &str) -> CompilationReport {
    compile_with_input(source, ())
}

pub fn output_lines(report: &CompilationReport) -> Vec<String> {
    report.output.lines().map(|x| x.to_string()).collect()
}
