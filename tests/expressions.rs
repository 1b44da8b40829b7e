use vecfield::{
    compile,
    error::{Error, EvalError, LexError, ParseError},
    interpreter::{
        evaluator::{Environment, evaluate},
        symbols::{FUNCTION_NAMES, Symbols},
    },
};

fn eval_str(src: &str) -> f64 {
    let symbols = Symbols::standard();
    let expr =
        compile(src, &symbols).unwrap_or_else(|e| panic!("'{src}' failed to compile: {e}"));
    evaluate(&expr, &Environment::new(), &symbols)
        .unwrap_or_else(|e| panic!("'{src}' failed to evaluate: {e}"))
}

fn eval_xy(src: &str, x: f64, y: f64) -> f64 {
    let symbols = Symbols::standard();
    let expr =
        compile(src, &symbols).unwrap_or_else(|e| panic!("'{src}' failed to compile: {e}"));
    evaluate(&expr, &Environment::xy(x, y), &symbols)
        .unwrap_or_else(|e| panic!("'{src}' failed to evaluate: {e}"))
}

fn compile_failure(src: &str) -> Error {
    let symbols = Symbols::standard();
    match compile(src, &symbols) {
        Ok(_) => panic!("'{src}' compiled but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}");
}

#[test]
fn precedence_follows_the_operator_table() {
    assert_eq!(eval_str("1 + 2 * 3"), 7.0);
    assert_eq!(eval_str("2 * 3 + 1"), 7.0);
    assert_eq!(eval_str("6 / 2 - 1"), 2.0);
    assert_eq!(eval_str("2 ^ 3 * 2"), 16.0);
    assert_eq!(eval_str("2 * 3 ^ 2"), 18.0);
}

#[test]
fn same_precedence_folds_left() {
    assert_eq!(eval_str("10 - 4 - 3"), 3.0);
    assert_eq!(eval_str("16 / 4 / 2"), 2.0);
    assert_eq!(eval_str("10 - 4 + 3"), 9.0);
}

#[test]
fn power_groups_to_the_right() {
    assert_eq!(eval_str("2 ^ 3 ^ 2"), 512.0);
    assert_eq!(eval_str("2 ^ 2 ^ 2 ^ 2"), 65536.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(eval_str("(1 + 2) * 3"), 9.0);
    assert_eq!(eval_str("(2 ^ 3) ^ 2"), 64.0);
    assert_eq!(eval_str("((((5))))"), 5.0);
}

#[test]
fn unary_operators_chain() {
    assert_eq!(eval_str("--5"), 5.0);
    assert_eq!(eval_str("---5"), -5.0);
    assert_eq!(eval_str("-+5"), -5.0);
    assert_eq!(eval_str("+5"), 5.0);
}

#[test]
fn unary_minus_binds_before_power() {
    assert_eq!(eval_str("-5^2"), 25.0);
    assert_eq!(eval_str("-(5^2)"), -25.0);
    assert_eq!(eval_str("2^-1"), 0.5);
}

#[test]
fn division_follows_floating_point_semantics() {
    assert_eq!(eval_str("1 / 0"), f64::INFINITY);
    assert_eq!(eval_str("-1 / 0"), f64::NEG_INFINITY);
    assert!(eval_str("0 / 0").is_nan());
}

#[test]
fn constants_substitute_their_values() {
    assert_eq!(eval_str("pi"), std::f64::consts::PI);
    assert_eq!(eval_str("e"), std::f64::consts::E);
    assert_eq!(eval_str("2 * pi"), std::f64::consts::TAU);
}

#[test]
fn variables_resolve_from_the_environment() {
    assert_eq!(eval_xy("x + y", 2.0, 3.0), 5.0);
    assert_eq!(eval_xy("x * x - y", 4.0, 6.0), 10.0);
    assert_eq!(eval_xy("y", 1.0, -2.5), -2.5);
}

#[test]
fn unbound_variable_is_an_evaluation_error() {
    let symbols = Symbols::standard();
    let expr = compile("x + 1", &symbols).unwrap();

    let result = evaluate(&expr, &Environment::new(), &symbols);
    assert!(matches!(result, Err(EvalError::UnknownVariable { .. })));
}

#[test]
fn evaluation_is_deterministic() {
    let symbols = Symbols::standard();
    let expr = compile("cos(y + (pi / 2))^2", &symbols).unwrap();
    let env = Environment::xy(0.3, 0.7);

    let first = evaluate(&expr, &env, &symbols).unwrap();
    let second = evaluate(&expr, &env, &symbols).unwrap();
    assert_eq!(first, second);
}

#[test]
fn reference_expressions_evaluate() {
    let x: f64 = 1.5;
    let y: f64 = -0.25;

    assert_close(eval_xy("cos(y + (pi / 2))^2", x, y),
                 (y + std::f64::consts::FRAC_PI_2).cos().powf(2.0));
    assert_close(eval_xy("sin(x)^2", x, y), x.sin().powf(2.0));
}

#[test]
fn random_stays_in_the_unit_interval() {
    for _ in 0..100 {
        let value = eval_str("random()");
        assert!((0.0..1.0).contains(&value));
    }
}

#[test]
fn logarithms_use_their_registered_bases() {
    assert_close(eval_str("ln(e)"), 1.0);
    assert_close(eval_str("log(100)"), 2.0);
    assert_close(eval_str("log2(8)"), 3.0);
}

#[test]
fn binary_functions_take_two_arguments() {
    assert_eq!(eval_str("min(2, 3)"), 2.0);
    assert_eq!(eval_str("max(2, 3)"), 3.0);
    assert_close(eval_str("atan2(1, 1)"), std::f64::consts::FRAC_PI_4);
}

#[test]
fn rounding_functions() {
    assert_eq!(eval_str("floor(3.7)"), 3.0);
    assert_eq!(eval_str("ceil(3.2)"), 4.0);
    assert_eq!(eval_str("round(3.5)"), 4.0);
    assert_eq!(eval_str("abs(-3)"), 3.0);
}

#[test]
fn every_registered_function_is_callable() {
    let symbols = Symbols::standard();

    for name in FUNCTION_NAMES {
        let function = symbols.function(name)
                              .unwrap_or_else(|| panic!("'{name}' missing from the table"));
        let args = vec!["0.5"; function.arity].join(", ");
        let src = format!("{name}({args})");

        let expr =
            compile(&src, &symbols).unwrap_or_else(|e| panic!("'{src}' failed to compile: {e}"));
        evaluate(&expr, &Environment::new(), &symbols)
            .unwrap_or_else(|e| panic!("'{src}' failed to evaluate: {e}"));
    }
}

#[test]
fn function_arity_is_enforced_at_parse_time() {
    assert!(matches!(compile_failure("atan2(1)"),
                     Error::Parse(ParseError::ExpectedComma { .. })));
    assert!(matches!(compile_failure("atan2(1, 2, 3)"),
                     Error::Parse(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(compile_failure("sin()"),
                     Error::Parse(_)));
    assert!(matches!(compile_failure("sin(1, 2)"),
                     Error::Parse(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(compile_failure("random(1)"),
                     Error::Parse(ParseError::ExpectedClosingParen { .. })));
}

#[test]
fn unrecognized_identifier_is_a_parse_error() {
    match compile_failure("foo(1)") {
        Error::Parse(ParseError::UnrecognizedIdentifier { name, .. }) => {
            assert_eq!(name, "foo");
        },
        other => panic!("expected an unrecognized identifier error, got {other:?}"),
    }
}

#[test]
fn function_identifier_requires_parentheses() {
    assert!(matches!(compile_failure("sin 1"),
                     Error::Parse(ParseError::ExpectedOpeningParen { .. })));
    assert!(matches!(compile_failure("sin"),
                     Error::Parse(ParseError::ExpectedOpeningParen { .. })));
}

#[test]
fn trailing_tokens_are_rejected() {
    assert!(matches!(compile_failure("1 + 2 3"),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(compile_failure("1 1"),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { .. })));
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    assert!(matches!(compile_failure("(1 + 2"),
                     Error::Parse(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(compile_failure("sin(1"),
                     Error::Parse(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(compile_failure("1 + 2)"),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { .. })));
}

#[test]
fn truncated_input_is_rejected() {
    assert!(matches!(compile_failure(""),
                     Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(compile_failure("1 +"),
                     Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(compile_failure("min(1,"),
                     Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn numbers_allow_at_most_one_decimal_point() {
    assert_eq!(eval_str("1."), 1.0);
    assert_eq!(eval_str("1.25"), 1.25);

    match compile_failure("1.2.3") {
        Error::Lex(LexError { character, .. }) => assert_eq!(character, '.'),
        other => panic!("expected a lex error, got {other:?}"),
    }
}

#[test]
fn alphabet_is_strictly_lowercase_ascii() {
    assert!(matches!(compile_failure("X"),
                     Error::Lex(LexError { character: 'X', .. })));
    assert!(matches!(compile_failure("a_b"),
                     Error::Lex(LexError { character: '_', .. })));
    assert!(matches!(compile_failure("1\t+ 2"),
                     Error::Lex(LexError { character: '\t', .. })));
    assert!(matches!(compile_failure("1 + $"),
                     Error::Lex(LexError { character: '$', .. })));
}

#[test]
fn lex_errors_report_the_offending_column() {
    match compile_failure("12 # 3") {
        Error::Lex(LexError { character, position }) => {
            assert_eq!(character, '#');
            assert_eq!(position, 4);
        },
        other => panic!("expected a lex error, got {other:?}"),
    }
}

#[test]
fn identifiers_lex_greedily() {
    // `cosx` is one identifier, not `cos` followed by `x`.
    assert!(matches!(compile_failure("cosx"),
                     Error::Parse(ParseError::UnrecognizedIdentifier { .. })));
    assert!(matches!(compile_failure("log10(1)"),
                     Error::Parse(ParseError::UnrecognizedIdentifier { .. })));
}

#[test]
fn whitespace_between_tokens_is_ignored() {
    assert_eq!(eval_str("1    +     2"), 3.0);
    assert_eq!(eval_str("cos( 0 )"), 1.0);
}
