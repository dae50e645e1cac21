//! Grammar for cfront, written as chumsky combinators
//!
//! ```text
//! start              := statement*
//! statement          := declaration | assignment | compound_statement
//!                     | expression ';' | ';'
//! declaration        := IDENTIFIER IDENTIFIER ';'
//! assignment         := IDENTIFIER IDENTIFIER '=' expression ';'
//! compound_statement := '{' statement* '}'
//! expression         := term (('+' | '-') term)*
//! term               := factor (('*' | '/') factor)*
//! factor             := NUMBER | IDENTIFIER | '(' expression ')'
//! ```
//!
//! Every production maps to one [`ParseNode`]. Alternatives that share a prefix
//! (declaration and assignment both start with two identifiers) are resolved by
//! backtracking, and when all alternatives fail the error from the one that got
//! furthest is reported.

use chumsky::prelude::*;
use std::ops::Range;

use crate::cfront::lexing::{Token, TokenKind, TokenLocation};
use crate::cfront::parsing::error::ParseError;
use crate::cfront::parsing::ir::{NodeType, ParseNode};

/// Match a token of the given kind, keeping the token and its span
pub(crate) fn kind(
    expected: TokenKind,
) -> impl Parser<Token, TokenLocation, Error = ParseError> + Clone {
    filter_map(move |span: Range<usize>, token: Token| {
        if token.kind == expected {
            Ok((token, span))
        } else {
            Err(ParseError::unexpected(span, [expected], Some(token)))
        }
    })
}

/// Match any of the given operator kinds
fn operator(
    first: TokenKind,
    second: TokenKind,
) -> impl Parser<Token, TokenLocation, Error = ParseError> + Clone {
    kind(first).or(kind(second))
}

/// Collapse `first (op operand)*` into one chain node
fn chain(
    node_type: NodeType,
    first: ParseNode,
    rest: Vec<(TokenLocation, ParseNode)>,
) -> ParseNode {
    let mut operators = Vec::with_capacity(rest.len());
    let mut operands = Vec::with_capacity(rest.len() + 1);
    operands.push(first);
    for (op, operand) in rest {
        operators.push(op);
        operands.push(operand);
    }
    ParseNode::new(node_type, operators, operands)
}

/// `expression := term (('+' | '-') term)*`
pub fn expression() -> impl Parser<Token, ParseNode, Error = ParseError> + Clone {
    recursive(|expression| {
        let literal = kind(TokenKind::Number)
            .or(kind(TokenKind::Identifier))
            .map(|token| ParseNode::new(NodeType::Factor, vec![token], Vec::new()));

        let parenthesized = kind(TokenKind::LParen)
            .then(expression)
            .then(kind(TokenKind::RParen))
            .map(|((open, inner), close)| {
                ParseNode::new(NodeType::Factor, vec![open, close], vec![inner])
            });

        let factor = literal.or(parenthesized).labelled("expression");

        let term = factor
            .clone()
            .then(operator(TokenKind::Times, TokenKind::Divide).then(factor).repeated())
            .map(|(first, rest)| chain(NodeType::Term, first, rest));

        term.clone()
            .then(operator(TokenKind::Plus, TokenKind::Minus).then(term).repeated())
            .map(|(first, rest)| chain(NodeType::Expression, first, rest))
    })
}

/// `statement := declaration | assignment | compound_statement | expression ';' | ';'`
pub fn statement() -> impl Parser<Token, ParseNode, Error = ParseError> + Clone {
    recursive(|statement| {
        let declaration = kind(TokenKind::Identifier)
            .then(kind(TokenKind::Identifier))
            .then(kind(TokenKind::Semicolon))
            .map(|((type_name, var_name), semicolon)| {
                ParseNode::new(
                    NodeType::Declaration,
                    vec![type_name, var_name, semicolon],
                    Vec::new(),
                )
            });

        let assignment = kind(TokenKind::Identifier)
            .then(kind(TokenKind::Identifier))
            .then(kind(TokenKind::Assign))
            .then(expression())
            .then(kind(TokenKind::Semicolon))
            .map(|((((type_name, var_name), assign), value), semicolon)| {
                ParseNode::new(
                    NodeType::Assignment,
                    vec![type_name, var_name, assign, semicolon],
                    vec![value],
                )
            });

        let compound = kind(TokenKind::LBrace)
            .then(statement.repeated())
            .then(kind(TokenKind::RBrace))
            .map(|((open, statements), close)| {
                ParseNode::new(NodeType::CompoundStatement, vec![open, close], statements)
            });

        let structured = choice((declaration, assignment, compound))
            .map(|node| ParseNode::with_children(NodeType::Statement, vec![node]));

        let expression_statement = expression()
            .then(kind(TokenKind::Semicolon))
            .map(|(expr, semicolon)| {
                ParseNode::new(NodeType::Statement, vec![semicolon], vec![expr])
            });

        let empty = kind(TokenKind::Semicolon)
            .map(|semicolon| ParseNode::new(NodeType::Statement, vec![semicolon], Vec::new()));

        choice((structured, expression_statement, empty)).labelled("statement")
    })
}

/// `start := statement*`, followed by the end of input
pub fn start() -> impl Parser<Token, ParseNode, Error = ParseError> + Clone {
    statement()
        .repeated()
        .then_ignore(end())
        .map(|statements| ParseNode::with_children(NodeType::Start, statements))
}
