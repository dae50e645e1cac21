//! End to end grammar tests: source text in, AST out

use cfront::cfront::testing::assert_ast;
use cfront::cfront::{compile, BinaryOperator, ExecutionError, Node, Program};
use rstest::rstest;

fn only_statement(source: &str) -> Node {
    let program = compile(source).expect("source to compile");
    assert_eq!(program.statements.len(), 1, "{}", source);
    program.statements.into_iter().next().expect("one statement")
}

#[rstest]
#[case("1 + 2 - 3;", "((1 + 2) - 3)")]
#[case("1 - 2 - 3;", "((1 - 2) - 3)")]
#[case("1 + 2 * 3;", "(1 + (2 * 3))")]
#[case("1 * 2 + 3;", "((1 * 2) + 3)")]
#[case("8 / 4 / 2;", "((8 / 4) / 2)")]
#[case("(1 + 2) * 3;", "((1 + 2) * 3)")]
#[case("a * (b - c) / d;", "((a * (b - c)) / d)")]
#[case("((((x))));", "x")]
#[case("2.9 * 3.;", "(2 * 3)")]
fn precedence_and_associativity(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(only_statement(source).to_string(), expected);
}

#[rstest]
#[case("int x;", "int x;")]
#[case("float ratio;", "float ratio;")]
#[case("int x = 2 + 3;", "int x = (2 + 3);")]
#[case("my_type _v1 = other;", "my_type _v1 = other;")]
#[case("{ int x; int y = 1; }", "{ int x; int y = 1; }")]
#[case("{ { } ; { x; } }", "{ { } { x } }")]
fn statements(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(only_statement(source).to_string(), expected);
}

#[test]
fn declaration_node() {
    assert_eq!(only_statement("int x;"), Node::declaration("int", "x"));
}

#[test]
fn assignment_node() {
    assert_eq!(
        only_statement("int x = 2 + 3;"),
        Node::assignment(
            "int",
            "x",
            Node::binary(BinaryOperator::Add, Node::number(2), Node::number(3))
        )
    );
}

#[test]
fn compound_node() {
    assert_eq!(
        only_statement("{ int x; int y = 1; }"),
        Node::compound(vec![
            Node::declaration("int", "x"),
            Node::assignment("int", "y", Node::number(1)),
        ])
    );
}

#[test]
fn whole_program() {
    let source = "\
// globals
int width = 80;
int height;

{
    int area = width * height; // nested
    area - 1;
}
";
    let program = compile(source).expect("program to compile");
    assert_ast(&program)
        .statement_count(3)
        .statement(0, |s| s.is_assignment("int", "width").value(|v| v.is_number(80)))
        .statement(1, |s| s.is_declaration("int", "height"))
        .statement(2, |s| {
            s.is_compound()
                .child_count(2)
                .child(0, |c| {
                    c.is_assignment("int", "area").value(|v| {
                        v.is_binary(BinaryOperator::Multiply)
                            .left(|l| l.is_identifier("width"))
                            .right(|r| r.is_identifier("height"))
                    })
                })
                .child(1, |c| {
                    c.is_binary(BinaryOperator::Subtract)
                        .renders_as("(area - 1)")
                })
        });
}

#[rstest]
#[case("")]
#[case("   \n\t")]
#[case("// only a comment")]
#[case(";;;")]
fn empty_programs(#[case] source: &str) {
    assert_eq!(compile(source), Ok(Program::default()));
}

#[rstest]
#[case("\"abc")]
#[case("int x = 1 $ 2;")]
#[case("x = y.z;")]
fn lexing_failures(#[case] source: &str) {
    assert!(matches!(compile(source), Err(ExecutionError::Lex(_))));
}

#[rstest]
#[case("1 +;")]
#[case("int x")]
#[case("int x = ;")]
#[case("int = 3;")]
#[case("x = 3;")]
#[case("{ int x;")]
#[case("int x; }")]
#[case("(1 + 2;")]
#[case("1 2;")]
#[case("#include <stdio>")]
#[case("print(\"hi\", x);")]
fn parsing_failures(#[case] source: &str) {
    assert!(matches!(compile(source), Err(ExecutionError::Parse(_))));
}

#[test]
fn parse_error_reports_expectations() {
    let Err(ExecutionError::Parse(err)) = compile("int x = 1 +;") else {
        panic!("expected a parse error");
    };
    assert_eq!(err.position(), 11);
    assert_eq!(err.found.as_ref().map(|t| t.lexeme.as_str()), Some(";"));
    assert!(!err.expected.is_empty());
}

#[test]
fn oversized_literal_is_a_build_error() {
    assert!(matches!(
        compile("int big = 123456789012345678901234567890;"),
        Err(ExecutionError::Build(_))
    ));
}
