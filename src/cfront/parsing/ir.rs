//! Concrete parse tree
//!
//! The parser produces a tree of `ParseNode`s named after grammar productions. A node
//! carries the tokens the production consumed directly and its child productions, so the
//! builder never has to look at the token stream again.
//!
//! Operator chains (`expression`, `term`) keep their operators in `tokens` and their
//! operands in `children`; a well formed chain has exactly one more operand than it has
//! operators.

use crate::cfront::ast::snapshot::{build_snapshot, AstSnapshot};
pub use crate::cfront::lexing::TokenLocation;

/// The grammar production a node was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Start,
    Statement,
    Declaration,
    Assignment,
    CompoundStatement,
    Expression,
    Term,
    Factor,
}

impl NodeType {
    /// Production name as written in the grammar
    pub fn production(&self) -> &'static str {
        match self {
            NodeType::Start => "start",
            NodeType::Statement => "statement",
            NodeType::Declaration => "declaration",
            NodeType::Assignment => "assignment",
            NodeType::CompoundStatement => "compound_statement",
            NodeType::Expression => "expression",
            NodeType::Term => "term",
            NodeType::Factor => "factor",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.production())
    }
}

/// A node in the parse tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNode {
    pub node_type: NodeType,
    pub tokens: Vec<TokenLocation>,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    /// Creates a new `ParseNode`.
    pub fn new(node_type: NodeType, tokens: Vec<TokenLocation>, children: Vec<ParseNode>) -> Self {
        Self {
            node_type,
            tokens,
            children,
        }
    }

    /// Creates a node with no tokens of its own
    pub fn with_children(node_type: NodeType, children: Vec<ParseNode>) -> Self {
        Self::new(node_type, Vec::new(), children)
    }

    /// Source text of the tokens this node consumed directly, space separated
    pub fn token_text(&self) -> String {
        self.tokens
            .iter()
            .map(|(token, _)| token.lexeme.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Byte range covered by this node and all of its descendants
    pub fn span(&self) -> Option<std::ops::Range<usize>> {
        let own = self.tokens.iter().map(|(_, span)| span.clone());
        let nested = self.children.iter().filter_map(ParseNode::span);
        own.chain(nested)
            .reduce(|acc, span| acc.start.min(span.start)..acc.end.max(span.end))
    }
}

impl From<&ParseNode> for AstSnapshot {
    fn from(node: &ParseNode) -> Self {
        build_snapshot(
            node,
            |node| AstSnapshot::new(node.node_type.production(), node.token_text()),
            |node| node.children.iter().collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfront::lexing::{Token, TokenKind};

    fn located(kind: TokenKind, lexeme: &str, start: usize) -> TokenLocation {
        (Token::new(kind, lexeme), start..start + lexeme.len())
    }

    #[test]
    fn test_span_covers_descendants() {
        let inner = ParseNode::new(
            NodeType::Factor,
            vec![located(TokenKind::Number, "42", 8)],
            vec![],
        );
        let node = ParseNode::new(
            NodeType::Assignment,
            vec![
                located(TokenKind::Identifier, "int", 0),
                located(TokenKind::Identifier, "x", 4),
                located(TokenKind::Assign, "=", 6),
                located(TokenKind::Semicolon, ";", 10),
            ],
            vec![inner],
        );
        assert_eq!(node.span(), Some(0..11));
        assert_eq!(node.token_text(), "int x = ;");
    }

    #[test]
    fn test_empty_node_has_no_span() {
        let node = ParseNode::with_children(NodeType::Start, vec![]);
        assert_eq!(node.span(), None);
    }

    #[test]
    fn test_snapshot_uses_production_names() {
        let node = ParseNode::with_children(
            NodeType::Statement,
            vec![ParseNode::new(
                NodeType::Factor,
                vec![located(TokenKind::Identifier, "y", 0)],
                vec![],
            )],
        );
        let snapshot = AstSnapshot::from(&node);
        assert_eq!(snapshot.node_type, "statement");
        assert_eq!(snapshot.children[0].node_type, "factor");
        assert_eq!(snapshot.children[0].label, "y");
    }
}
