// Copyright (C) 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use churraslang::{Stage, Status};
use rstest::rstest;
use tests::compile_silent;

#[rstest]
#[case("INICIAR_CHURRAS COZINHAR SERVIR \"aberta; FIM_CHURRAS", "String não terminada")]
#[case("INICIAR_CHURRAS COZINHAR SERVIR 3.; FIM_CHURRAS", "Número real malformado")]
#[case("INICIAR_CHURRAS COZINHAR SERVIR 1 ? 2; FIM_CHURRAS", "Símbolo inválido '?'")]
fn lexical_errors(#[case] source: &str, #[case] message_prefix: &str) {
    let report = compile_silent(source);

    assert_eq!(report.status, Status::Error);
    assert_eq!(report.error_stage, Some(Stage::Lexical));
    assert!(
        report.error_message.starts_with(message_prefix),
        "mensagem: {}",
        report.error_message,
    );

    // lexical failures abort before any token exists to anchor or list
    assert_eq!(report.error_token, None);
    assert!(report.tokens.is_empty());
}

#[rstest]
#[case("INICIAR_CHURRAS DESPENSA a : PICANHA a : PICANHA; COZINHAR FIM_CHURRAS")]
#[case("COZINHAR SERVIR 1; FIM_CHURRAS")]
#[case("INICIAR_CHURRAS COZINHAR SERVIR 1 FIM_CHURRAS")]
#[case("INICIAR_CHURRAS COZINHAR x 1; FIM_CHURRAS")]
#[case("INICIAR_CHURRAS COZINHAR SERVIR (1 + 2; FIM_CHURRAS")]
#[case("INICIAR_CHURRAS COZINHAR SERVIR ; FIM_CHURRAS")]
fn syntactic_errors(#[case] source: &str) {
    let report = compile_silent(source);

    assert_eq!(report.status, Status::Error);
    assert_eq!(report.error_stage, Some(Stage::Syntactic));
    assert!(report.error_token.is_some());
}

#[rstest]
#[case("INICIAR_CHURRAS COZINHAR SERVIR b; FIM_CHURRAS", "b")]
#[case("INICIAR_CHURRAS COZINHAR convidados = 2; FIM_CHURRAS", "convidados")]
#[case("INICIAR_CHURRAS COZINHAR PROVAR farofa; FIM_CHURRAS", "farofa")]
fn undeclared_variable_is_semantic_and_named(#[case] source: &str, #[case] name: &str) {
    let report = compile_silent(source);

    assert_eq!(report.status, Status::Error);
    assert_eq!(report.error_stage, Some(Stage::Semantic));
    assert!(
        report.error_message.contains(name),
        "mensagem: {}",
        report.error_message,
    );

    let token = report.error_token.expect("erro deve apontar a variável");
    assert_eq!(token.lexeme, name);
}

#[rstest]
#[case("INICIAR_CHURRAS COZINHAR SERVIR 10 / 0; FIM_CHURRAS")]
#[case("INICIAR_CHURRAS COZINHAR SERVIR 10 / (2 - 2); FIM_CHURRAS")]
#[case("INICIAR_CHURRAS COZINHAR SERVIR 2.5 / 0.0; FIM_CHURRAS")]
#[case("INICIAR_CHURRAS COZINHAR SERVIR 1 + 10 / (4 - 2 * 2); FIM_CHURRAS")]
fn division_by_zero_is_semantic_and_anchors_the_operator(#[case] source: &str) {
    let report = compile_silent(source);

    assert_eq!(report.status, Status::Error);
    assert_eq!(report.error_stage, Some(Stage::Semantic));
    assert_eq!(report.error_message, "Divisão por zero.");

    let token = report.error_token.expect("erro deve apontar o operador");
    assert_eq!(token.lexeme, "/");
}

#[test]
fn assigning_a_string_to_a_numeric_variable_is_semantic() {
    let report = compile_silent(
        "INICIAR_CHURRAS DESPENSA x: PICANHA; COZINHAR x = \"picanha\"; FIM_CHURRAS",
    );

    assert_eq!(report.status, Status::Error);
    assert_eq!(report.error_stage, Some(Stage::Semantic));
    assert_eq!(report.error_message, "Não é possível atribuir String a uma variável numérica.");

    let token = report.error_token.expect("erro deve apontar a variável");
    assert_eq!(token.lexeme, "x");
}

#[test]
fn string_operands_in_arithmetic_are_semantic() {
    let report = compile_silent("INICIAR_CHURRAS COZINHAR SERVIR \"a\" + 1; FIM_CHURRAS");

    assert_eq!(report.status, Status::Error);
    assert_eq!(report.error_stage, Some(Stage::Semantic));

    let token = report.error_token.expect("erro deve apontar o operador");
    assert_eq!(token.lexeme, "+");
}

#[test]
fn stray_statement_start_only_fails_at_the_closing_keyword() {
    // the statement loop ends silently at a token that starts no statement;
    // the report blames the spot where FIM_CHURRAS was expected instead
    let report = compile_silent("INICIAR_CHURRAS COZINHAR 42 SERVIR 1; FIM_CHURRAS");

    assert_eq!(report.status, Status::Error);
    assert_eq!(report.error_stage, Some(Stage::Syntactic));
    assert!(
        report.error_message.contains("FIM_CHURRAS"),
        "mensagem: {}",
        report.error_message,
    );

    let token = report.error_token.expect("erro deve apontar o token encontrado");
    assert_eq!(token.lexeme, "42");
}

#[test]
fn embedded_evaluation_checks_the_factor_before_the_terminator() {
    // evaluation happens while parsing: the undeclared `b` is caught inside
    // the expression even though the statement also misses its `;`
    let report = compile_silent("INICIAR_CHURRAS COZINHAR SERVIR b FIM_CHURRAS");

    assert_eq!(report.error_stage, Some(Stage::Semantic));
    assert!(report.error_message.contains("'b'"));
}
