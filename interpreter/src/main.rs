// Copyright (C) 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

use std::{io::BufRead, path::PathBuf, process::exit};

use anyhow::Context;
use churraslang::{compile, CompilationReport, Status};
use clap::Subcommand;
use colored::Colorize;

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Emite o relatório em JSON, para front-ends gráficos.
    #[arg(long)]
    json: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compila e executa um programa ChurrasLang (arquivo `.churras`).
    Assar {
        arquivo: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse_args();

    match args.command {
        Commands::Assar { arquivo } => {
            let source = match arquivo {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("não foi possível ler '{}'", path.display()))?,
                None => read_source_interactively()?,
            };

            log::debug!("{} bytes de código-fonte", source.len());
            let report = compile(&source);

            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }

            if report.status == Status::Error {
                exit(1);
            }
        }
    }

    Ok(())
}

/// Original terminal workflow: paste the program, then type `ASSAR` on a
/// line of its own to compile.
fn read_source_interactively() -> anyhow::Result<String> {
    println!("--- Compilador ChurrasLang (Modo Terminal) ---");
    println!("Digite ou cole seu código. Digite 'ASSAR' em uma linha vazia para compilar.");

    let mut lines = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line?;

        if line.trim().eq_ignore_ascii_case("ASSAR") {
            break;
        }

        lines.push(line);
    }

    Ok(lines.join("\n"))
}

fn print_report(report: &CompilationReport) {
    println!();
    println!("{}", "--- RELATÓRIO DA COMPILAÇÃO ---".bold());

    println!("\n{}", "[TOKENS RECONHECIDOS]".blue().bold());
    if report.tokens.is_empty() {
        println!("<nenhum>");
    } else {
        for line in &report.tokens {
            println!("{line}");
        }
    }

    match report.error_stage {
        Some(stage) => {
            println!("\n[STATUS: {}]", stage.to_string().red().bold());
            println!("{}", report.error_message.bold());

            if let Some(token) = &report.error_token {
                println!("Em {}", token.location);
            }
        }

        None => {
            println!("\n[STATUS: {}]", "Sucesso".green().bold());
            println!("{}", report.error_message);

            println!("\n{}", "[SAÍDA DO PROGRAMA]".blue().bold());
            println!("{}", report.output);
        }
    }
}
