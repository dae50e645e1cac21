//! Property-based tests over built ASTs
//!
//! Random trees are printed as source, fully parenthesized, then compiled again; the
//! result must equal the tree they were printed from. Rendering must be deterministic.

use cfront::cfront::ast::snapshot_from_program;
use cfront::cfront::formats::FormatRegistry;
use cfront::cfront::{compile, BinaryOperator, Node, Program};
use proptest::prelude::*;

fn operator() -> impl Strategy<Value = BinaryOperator> {
    prop_oneof![
        Just(BinaryOperator::Add),
        Just(BinaryOperator::Subtract),
        Just(BinaryOperator::Multiply),
        Just(BinaryOperator::Divide),
    ]
}

fn expression() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        (0i64..1_000_000).prop_map(Node::number),
        "[a-z_][a-z0-9_]{0,6}".prop_map(Node::identifier),
    ];
    leaf.prop_recursive(6, 48, 2, |inner| {
        (operator(), inner.clone(), inner)
            .prop_map(|(op, left, right)| Node::binary(op, left, right))
    })
}

fn statement() -> impl Strategy<Value = Node> {
    let simple = prop_oneof![
        ("[a-z]{1,5}", "[a-z_]{1,5}").prop_map(|(t, v)| Node::declaration(t, v)),
        ("[a-z]{1,5}", "[a-z_]{1,5}", expression())
            .prop_map(|(t, v, e)| Node::assignment(t, v, e)),
        expression(),
    ];
    simple.prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Node::compound)
    })
}

/// Source text for a statement; expression statements need their `;`
fn to_source(node: &Node) -> String {
    match node {
        Node::CompoundStatement(compound) => {
            let inner: Vec<String> = compound.statements.iter().map(to_source).collect();
            format!("{{ {} }}", inner.join(" "))
        }
        node if node.is_expression() => format!("{};", node),
        node => node.to_string(),
    }
}

fn check_invariants(node: &Node) {
    match node {
        Node::BinaryOp(op) => {
            assert!(op.left.is_expression() && op.right.is_expression());
            assert_eq!(node.children().len(), 2);
        }
        Node::Assignment(assignment) => assert!(assignment.value.is_expression()),
        _ => {}
    }
    node.children().into_iter().for_each(check_invariants);
}

proptest! {
    #[test]
    fn printed_programs_compile_back(statements in prop::collection::vec(statement(), 0..6)) {
        let source: Vec<String> = statements.iter().map(to_source).collect();
        let program = compile(&source.join("\n")).expect("printed program to compile");
        prop_assert_eq!(program, Program::new(statements));
    }

    #[test]
    fn built_trees_keep_invariants(statements in prop::collection::vec(statement(), 1..6)) {
        let source: Vec<String> = statements.iter().map(to_source).collect();
        let program = compile(&source.join(" ")).expect("printed program to compile");
        program.statements.iter().for_each(check_invariants);
    }

    #[test]
    fn rendering_is_deterministic(statements in prop::collection::vec(statement(), 0..4)) {
        let program = Program::new(statements);
        let registry = FormatRegistry::with_defaults();
        for format in registry.list_formats() {
            let first = registry.serialize(&snapshot_from_program(&program), &format);
            let second = registry.serialize(&snapshot_from_program(&program.clone()), &format);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn treeviz_has_one_line_per_node(statements in prop::collection::vec(statement(), 0..4)) {
        let program = Program::new(statements);
        let output = FormatRegistry::with_defaults()
            .serialize(&snapshot_from_program(&program), "treeviz")
            .expect("treeviz to render");
        prop_assert_eq!(output.lines().count(), program.node_count() + 1);
    }
}
