//! AST Builder from ParseNode IR
//!
//! This module contains the `AstTreeBuilder`, which walks the `ParseNode` tree
//! produced by the parser and constructs the final AST.

use crate::cfront::ast::{Node, Program};
use crate::cfront::building::error::BuildError;
use crate::cfront::building::literals::{chain_operator, identifier_at, parse_integer_literal};
use crate::cfront::lexing::TokenKind;
use crate::cfront::parsing::ir::{NodeType, ParseNode};

/// A builder that constructs an AST from a `ParseNode` tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct AstTreeBuilder;

impl AstTreeBuilder {
    /// Creates a new `AstTreeBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds a `Program` from a root `ParseNode`.
    pub fn build(&self, root: ParseNode) -> Result<Program, BuildError> {
        expect_type(&root, NodeType::Start)?;
        let statements = self.build_statements(root.children)?;
        Ok(Program::new(statements))
    }

    /// Builds the AST for any production below the root.
    ///
    /// An empty statement has no AST and is reported as malformed here; statement lists
    /// drop empty statements before they get this far.
    pub fn build_node(&self, node: ParseNode) -> Result<Node, BuildError> {
        match node.node_type {
            NodeType::Start => Err(BuildError::MalformedProduction {
                production: NodeType::Start,
                reason: "the root builds a Program, not a node",
            }),
            NodeType::Statement => {
                self.build_statement(node)?
                    .ok_or(BuildError::MalformedProduction {
                        production: NodeType::Statement,
                        reason: "empty statement has no node",
                    })
            }
            NodeType::Declaration => self.build_declaration(node),
            NodeType::Assignment => self.build_assignment(node),
            NodeType::CompoundStatement => self.build_compound(node),
            NodeType::Expression => self.build_chain(node, NodeType::Term),
            NodeType::Term => self.build_chain(node, NodeType::Factor),
            NodeType::Factor => self.build_factor(node),
        }
    }

    /// Builds a statement list, dropping empty statements.
    fn build_statements(&self, nodes: Vec<ParseNode>) -> Result<Vec<Node>, BuildError> {
        nodes
            .into_iter()
            .filter_map(|node| self.build_statement(node).transpose())
            .collect()
    }

    fn build_statement(&self, node: ParseNode) -> Result<Option<Node>, BuildError> {
        expect_type(&node, NodeType::Statement)?;
        let mut children = node.children;
        if children.len() > 1 {
            return Err(BuildError::MalformedProduction {
                production: NodeType::Statement,
                reason: "more than one child",
            });
        }
        children.pop().map(|child| self.build_node(child)).transpose()
    }

    fn build_declaration(&self, node: ParseNode) -> Result<Node, BuildError> {
        let production = NodeType::Declaration;
        if node.tokens.len() != 3 || !node.children.is_empty() {
            return Err(BuildError::MalformedProduction {
                production,
                reason: "expected `type name ;`",
            });
        }
        let type_name = identifier_at(production, &node.tokens, 0)?;
        let var_name = identifier_at(production, &node.tokens, 1)?;
        Ok(Node::declaration(type_name, var_name))
    }

    fn build_assignment(&self, node: ParseNode) -> Result<Node, BuildError> {
        let production = NodeType::Assignment;
        let ParseNode {
            tokens,
            mut children,
            ..
        } = node;
        if tokens.len() != 4 || children.len() != 1 {
            return Err(BuildError::MalformedProduction {
                production,
                reason: "expected `type name = expression ;`",
            });
        }
        let type_name = identifier_at(production, &tokens, 0)?;
        let var_name = identifier_at(production, &tokens, 1)?;
        let value = match children.pop() {
            Some(child) => {
                expect_type(&child, NodeType::Expression)?;
                self.build_node(child)?
            }
            None => {
                return Err(BuildError::MalformedProduction {
                    production,
                    reason: "missing value",
                })
            }
        };
        Ok(Node::assignment(type_name, var_name, value))
    }

    fn build_compound(&self, node: ParseNode) -> Result<Node, BuildError> {
        let statements = self.build_statements(node.children)?;
        Ok(Node::compound(statements))
    }

    /// Left fold: `a op1 b op2 c` becomes `(a op1 b) op2 c`.
    fn build_chain(&self, node: ParseNode, operand_type: NodeType) -> Result<Node, BuildError> {
        let ParseNode {
            node_type: production,
            tokens: operators,
            children: operands,
        } = node;
        if operands.len() != operators.len() + 1 {
            return Err(BuildError::OperandMismatch {
                production,
                operators: operators.len(),
                operands: operands.len(),
            });
        }

        let mut operands = operands.into_iter();
        let mut tree = match operands.next() {
            Some(first) => self.build_operand(first, operand_type)?,
            None => {
                return Err(BuildError::MalformedProduction {
                    production,
                    reason: "no operands",
                })
            }
        };
        for (operator, operand) in operators.iter().zip(operands) {
            let operator = chain_operator(production, operator)?;
            let right = self.build_operand(operand, operand_type)?;
            tree = Node::binary(operator, tree, right);
        }
        Ok(tree)
    }

    fn build_operand(&self, node: ParseNode, expected: NodeType) -> Result<Node, BuildError> {
        expect_type(&node, expected)?;
        self.build_node(node)
    }

    /// A literal, or the AST of a parenthesized expression unchanged.
    fn build_factor(&self, node: ParseNode) -> Result<Node, BuildError> {
        let production = NodeType::Factor;
        let ParseNode {
            tokens,
            mut children,
            ..
        } = node;
        match (tokens.as_slice(), children.pop()) {
            ([literal], None) if children.is_empty() => match literal.0.kind {
                TokenKind::Number => Ok(Node::number(parse_integer_literal(literal)?)),
                TokenKind::Identifier => Ok(Node::identifier(literal.0.lexeme.clone())),
                _ => Err(BuildError::MalformedProduction {
                    production,
                    reason: "expected a number or an identifier",
                }),
            },
            ([open, close], Some(inner))
                if children.is_empty()
                    && open.0.kind == TokenKind::LParen
                    && close.0.kind == TokenKind::RParen =>
            {
                self.build_operand(inner, NodeType::Expression)
            }
            _ => Err(BuildError::MalformedProduction {
                production,
                reason: "expected a literal or a parenthesized expression",
            }),
        }
    }
}

fn expect_type(node: &ParseNode, expected: NodeType) -> Result<(), BuildError> {
    if node.node_type == expected {
        Ok(())
    } else {
        Err(BuildError::UnexpectedNode {
            expected,
            found: node.node_type,
        })
    }
}
