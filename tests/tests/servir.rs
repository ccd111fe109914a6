// Copyright (C) 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use churraslang::Status;
use rstest::rstest;
use tests::{compile_silent, output_lines};

#[rstest]
#[case(
    "INICIAR_CHURRAS DESPENSA x: PICANHA; COZINHAR x = 3 + 4 * 2; SERVIR x; FIM_CHURRAS",
    &["11"],
)]
#[case(
    r#"
        INICIAR_CHURRAS
        COZINHAR
            SERVIR "Bem-vindos ao churrasco!";
        FIM_CHURRAS
    "#,
    &["Bem-vindos ao churrasco!"],
)]
#[case(
    r#"
        INICIAR_CHURRAS
        DESPENSA
            total: ARROZ;
        COZINHAR
            total = 1.5 + 2.5;
            SERVIR total;
        FIM_CHURRAS
    "#,
    &["4.0"],
)]
#[case(
    r#"
        INICIAR_CHURRAS
        COZINHAR
            SERVIR (3 + 4) * 2;
            SERVIR 10 / 4;
        FIM_CHURRAS
    "#,
    &["14", "2.5"],
)]
#[case(
    r#"
        # declarações e comandos em letras minúsculas
        iniciar_churras
        despensa
            espetos: picanha;
        cozinhar
            espetos = 9 / 3;   # divisão real, truncada na atribuição
            servir espetos;
        fim_churras
    "#,
    &["3"],
)]
#[case(
    r#"
        INICIAR_CHURRAS
        DESPENSA
            a: PICANHA;
            b: ARROZ;
        COZINHAR
            a = 10;
            b = a / 4;
            SERVIR a - 1;
            SERVIR b;
            SERVIR "pronto";
        FIM_CHURRAS
    "#,
    &["9", "2.5", "pronto"],
)]
fn programs_and_their_output(#[case] source: &str, #[case] expected: &[&str]) {
    let report = compile_silent(source);

    assert_eq!(report.status, Status::Success, "relatório: {report:?}");
    assert_eq!(output_lines(&report), expected);
}

#[test]
fn output_line_count_matches_the_servir_statements() {
    let report = compile_silent(
        "INICIAR_CHURRAS COZINHAR SERVIR 1; SERVIR 2; SERVIR 3; FIM_CHURRAS",
    );

    assert_eq!(report.status, Status::Success);
    assert_eq!(output_lines(&report).len(), 3);
}

#[test]
fn program_without_servir_reports_the_placeholder() {
    let report = compile_silent("INICIAR_CHURRAS DESPENSA x: PICANHA; COZINHAR x = 1; FIM_CHURRAS");

    assert_eq!(report.status, Status::Success);
    assert_eq!(report.output, "<nenhuma>");
}

#[test]
fn token_table_lists_every_non_eof_token_in_source_order() {
    let report = compile_silent("INICIAR_CHURRAS COZINHAR SERVIR 1; FIM_CHURRAS");

    assert_eq!(report.tokens.len(), 6);
    assert!(report.tokens[0].starts_with("INICIAR_CHURRAS"));
    assert!(report.tokens[5].starts_with("FIM_CHURRAS"));
    assert!(report.tokens.iter().all(|line| !line.starts_with("EOF")));
}
