//! Integration tests for the front end.
//!
//! These tests run whole programs through the lexer, parser and driver and
//! check the resulting top-level units, diagnostics and recovery.

use kaleidoscope::{
    ast::{
        ast::Expr,
        declarations::{Function, Prototype},
        expressions::ForExpr,
    },
    driver::{parse, Driver, TopLevel},
    errors::errors::ErrorCategory,
    format_error,
    lexer::lexer::Lexer,
};

const PROGRAM: &str = "\
# Compute the x'th fibonacci number.
extern putchard(char);

def fib(x)
  if x < 3 then
    1
  else
    fib(x-1)+fib(x-2)

def printstar(n)
  for i = 1, i < n, 1.0 in
    putchard(42)  # ascii 42 = '*'

fib(40);
";

#[test]
fn test_parse_program() {
    let units = parse(PROGRAM, Some("fib.ks".to_string()));

    assert_eq!(units.len(), 4);
    assert!(units.iter().all(Result::is_ok));

    let units: Vec<TopLevel> = units.into_iter().map(Result::unwrap).collect();

    assert_eq!(
        units[0],
        TopLevel::Extern(Prototype::new("putchard", vec!["char".to_string()]))
    );

    let fib_body = Expr::if_else(
        Expr::binary('<', Expr::variable("x"), Expr::number(3.0)),
        Expr::number(1.0),
        Expr::binary(
            '+',
            Expr::call("fib", vec![Expr::binary('-', Expr::variable("x"), Expr::number(1.0))]),
            Expr::call("fib", vec![Expr::binary('-', Expr::variable("x"), Expr::number(2.0))]),
        ),
    );
    assert_eq!(
        units[1],
        TopLevel::Definition(Function {
            prototype: Prototype::new("fib", vec!["x".to_string()]),
            body: fib_body,
        })
    );

    assert_eq!(
        units[2],
        TopLevel::Definition(Function {
            prototype: Prototype::new("printstar", vec!["n".to_string()]),
            body: Expr::For(ForExpr {
                var_name: "i".to_string(),
                start: Box::new(Expr::number(1.0)),
                end: Box::new(Expr::binary('<', Expr::variable("i"), Expr::variable("n"))),
                step: Some(Box::new(Expr::number(1.0))),
                body: Box::new(Expr::call("putchard", vec![Expr::number(42.0)])),
            }),
        })
    );

    assert_eq!(
        units[3],
        TopLevel::Expression(Function {
            prototype: Prototype::anonymous(),
            body: Expr::call("fib", vec![Expr::number(40.0)]),
        })
    );
}

#[test]
fn test_registry_after_program() {
    let mut driver = Driver::from_source(PROGRAM, None);
    let failures = driver.by_ref().filter(Result::is_err).count();

    assert_eq!(failures, 0);
    assert_eq!(driver.registry().names(), vec!["fib", "printstar", "putchard"]);
    assert_eq!(driver.registry().arity("putchard"), Some(1));
    // Anonymous wrappers are never declared
    assert!(!driver.registry().contains("__anon_expr"));
}

#[test]
fn test_streamed_input_matches_buffered() {
    let streamed: Vec<_> = Driver::new(Lexer::new(PROGRAM.chars().collect::<Vec<_>>().into_iter(), None))
        .collect();

    assert_eq!(streamed, parse(PROGRAM, None));
}

#[test]
fn test_recovery_after_bad_definition() {
    // `def 1` fails at `1`, which is then skipped, leaving `+ 2` and `def ok()`
    let units = parse("def 1 + 2; def ok() 7", None);

    assert!(units[0].is_err());
    assert_eq!(
        units[0].as_ref().unwrap_err().message(),
        "Expected function name in prototype"
    );
    assert_eq!(
        units[1].as_ref().unwrap_err().get_category(),
        ErrorCategory::UnknownPrimary
    );
    assert_eq!(
        units.last().unwrap(),
        &Ok(TopLevel::Definition(Function {
            prototype: Prototype::new("ok", vec![]),
            body: Expr::number(7.0),
        }))
    );
}

#[test]
fn test_malformed_input_terminates() {
    let source = "))))(((( then else in , , =";
    let units = parse(source, None);

    assert!(!units.is_empty());
    assert!(units.len() <= source.split_whitespace().map(str::len).sum::<usize>());
}

#[test]
fn test_diagnostic_rendering() {
    let source = "def ok() 1\nif 1 then 2\n";
    let units = parse(source, Some("branch.ks".to_string()));

    let error = units[1].as_ref().unwrap_err();
    assert_eq!(error.message(), "expected else");

    let rendered = format_error(error, source, "branch.ks");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "Error: UnexpectedEOF (Input ended early, expected else)");
    assert_eq!(lines[1], "-> branch.ks");
    assert_eq!(lines[3], "3 | ");
}
