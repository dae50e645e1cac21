//! Fluent assertion API for built programs
//!
//!     Tests that walk `Node`s by hand get long fast: every level needs a `match`, and a
//!     nested expression turns into a ladder of `if let`s. `assert_ast` wraps that walk in
//!     chainable checks that name the node they failed on:
//!
//!     ```rust,ignore
//!     use cfront::cfront::{compile, testing::assert_ast, BinaryOperator};
//!
//!     let program = compile("int x = 1 + 2 * y;").unwrap();
//!     assert_ast(&program)
//!         .statement_count(1)
//!         .statement(0, |s| {
//!             s.is_assignment("int", "x").value(|v| {
//!                 v.is_binary(BinaryOperator::Add)
//!                     .left(|l| l.is_number(1))
//!                     .right(|r| r.is_binary(BinaryOperator::Multiply).renders_as("(2 * y)"))
//!             })
//!         });
//!     ```
//!
//!     Failures panic with the path to the node, e.g. `statements[0].value.right`.

use crate::cfront::ast::{AstNode, BinaryOperator, Node, Program};

/// Create an assertion builder for a program
pub fn assert_ast(program: &Program) -> ProgramAssertion<'_> {
    ProgramAssertion { program }
}

fn summarize(nodes: &[&Node]) -> String {
    nodes
        .iter()
        .map(|node| format!("{}({})", node.node_type(), node.display_label()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct ProgramAssertion<'a> {
    program: &'a Program,
}

impl<'a> ProgramAssertion<'a> {
    pub fn statement_count(self, expected: usize) -> Self {
        let actual = self.program.statements.len();
        let nodes: Vec<&Node> = self.program.statements.iter().collect();
        assert_eq!(
            actual,
            expected,
            "Expected {} statements, found {}: [{}]",
            expected,
            actual,
            summarize(&nodes)
        );
        self
    }

    pub fn statement<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>) -> NodeAssertion<'a>,
    {
        let node = self.program.statements.get(index).unwrap_or_else(|| {
            panic!(
                "Statement index {} out of bounds (program has {} statements)",
                index,
                self.program.statements.len()
            )
        });
        assertion(NodeAssertion {
            node,
            context: format!("statements[{}]", index),
        });
        self
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    fn fail(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {} ({})",
            self.context,
            expected,
            self.node.node_type(),
            self.node
        )
    }

    fn nested<F>(self, node: &'a Node, name: &str, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>) -> NodeAssertion<'a>,
    {
        assertion(NodeAssertion {
            node,
            context: format!("{}.{}", self.context, name),
        });
        self
    }

    pub fn is_number(self, expected: i64) -> Self {
        let node: &'a Node = self.node;
        match node {
            Node::Number(n) if n.value == expected => self,
            _ => self.fail(&format!("Number({})", expected)),
        }
    }

    pub fn is_identifier(self, expected: &str) -> Self {
        let node: &'a Node = self.node;
        match node {
            Node::Identifier(i) if i.name == expected => self,
            _ => self.fail(&format!("Identifier({})", expected)),
        }
    }

    pub fn is_binary(self, expected: BinaryOperator) -> Self {
        let node: &'a Node = self.node;
        match node {
            Node::BinaryOp(op) if op.operator == expected => self,
            _ => self.fail(&format!("BinaryOp({})", expected)),
        }
    }

    pub fn is_declaration(self, type_name: &str, var_name: &str) -> Self {
        let node: &'a Node = self.node;
        match node {
            Node::Declaration(d) if d.type_name == type_name && d.var_name == var_name => self,
            _ => self.fail(&format!("Declaration({} {})", type_name, var_name)),
        }
    }

    pub fn is_assignment(self, type_name: &str, var_name: &str) -> Self {
        let node: &'a Node = self.node;
        match node {
            Node::Assignment(a) if a.type_name == type_name && a.var_name == var_name => self,
            _ => self.fail(&format!("Assignment({} {})", type_name, var_name)),
        }
    }

    pub fn is_compound(self) -> Self {
        let node: &'a Node = self.node;
        match node {
            Node::CompoundStatement(_) => self,
            _ => self.fail("CompoundStatement"),
        }
    }

    pub fn child_count(self, expected: usize) -> Self {
        let children = self.node.children();
        assert_eq!(
            children.len(),
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            children.len(),
            summarize(&children)
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>) -> NodeAssertion<'a>,
    {
        let node: &'a Node = self.node;
        let child = node.children().get(index).copied().unwrap_or_else(|| {
            panic!(
                "{}: Child index {} out of bounds ({} children)",
                self.context,
                index,
                node.children().len()
            )
        });
        self.nested(child, &format!("children[{}]", index), assertion)
    }

    pub fn left<F>(self, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>) -> NodeAssertion<'a>,
    {
        let node: &'a Node = self.node;
        match node {
            Node::BinaryOp(op) => self.nested(&op.left, "left", assertion),
            _ => self.fail("BinaryOp"),
        }
    }

    pub fn right<F>(self, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>) -> NodeAssertion<'a>,
    {
        let node: &'a Node = self.node;
        match node {
            Node::BinaryOp(op) => self.nested(&op.right, "right", assertion),
            _ => self.fail("BinaryOp"),
        }
    }

    pub fn value<F>(self, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>) -> NodeAssertion<'a>,
    {
        let node: &'a Node = self.node;
        match node {
            Node::Assignment(a) => self.nested(&a.value, "value", assertion),
            _ => self.fail("Assignment"),
        }
    }

    /// Compare against the compact source rendering of the node
    pub fn renders_as(self, expected: &str) -> Self {
        assert_eq!(
            self.node.to_string(),
            expected,
            "{}: rendering mismatch",
            self.context
        );
        self
    }
}
