//! Parsing module for cfront
//!
//! Syntactic analysis turns the flat token sequence into a concrete parse tree (see
//! [ir](ir)). The grammar lives in [grammar](grammar); it is unambiguous with one token of
//! lookahead except for the declaration/assignment prefix, which chumsky resolves by
//! backtracking.
//!
//! Parsing aborts on the first error. There is no recovery and no partial tree.
//!
//! Nested parentheses and braces recurse through the grammar, so nesting is limited to
//! [`MAX_NESTING_DEPTH`] open brackets. Deeper input is rejected with a `ParseError` at the
//! first bracket past the limit before the grammar runs. Operator chains are not nested and
//! have no length limit.
//!
//! Terminology
//!
//!     - parse: tokens -> ParseNode (this module)
//!     - build: ParseNode -> AST (see [building](crate::cfront::building))

pub mod error;
pub mod grammar;
pub mod ir;

pub use error::{Expected, ParseError};
pub use ir::{NodeType, ParseNode};

use crate::cfront::lexing::{Token, TokenKind, TokenLocation};
use chumsky::{Parser, Stream};

/// Most parentheses and braces that may be open at once
pub const MAX_NESTING_DEPTH: usize = 128;

/// Reject bracket nesting deeper than [`MAX_NESTING_DEPTH`]
///
/// Unbalanced closers are left for the grammar to report.
fn check_nesting(tokens: &[TokenLocation]) -> Result<(), ParseError> {
    let mut depth = 0usize;
    for (token, span) in tokens {
        match token.kind {
            TokenKind::LParen | TokenKind::LBrace => {
                depth += 1;
                if depth > MAX_NESTING_DEPTH {
                    return Err(ParseError::too_deep(span.clone(), token.clone()));
                }
            }
            TokenKind::RParen | TokenKind::RBrace => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

/// Parse located tokens into a parse tree rooted at a `Start` node.
///
/// Error positions are the byte offsets carried by the tokens.
pub fn parse_with_spans(tokens: Vec<TokenLocation>) -> Result<ParseNode, ParseError> {
    check_nesting(&tokens)?;
    let end = tokens.last().map(|(_, span)| span.end).unwrap_or(0);
    let stream = Stream::from_iter(end..end, tokens.into_iter());
    grammar::start().parse(stream).map_err(|errors| {
        errors
            .into_iter()
            .next()
            .unwrap_or_else(|| ParseError::unexpected(end..end, [], None))
    })
}

/// Parse a bare token sequence.
///
/// Tokens carry no source offsets here, so error positions are token indices.
pub fn parse(tokens: Vec<Token>) -> Result<ParseNode, ParseError> {
    let located = tokens
        .into_iter()
        .enumerate()
        .map(|(index, token)| (token, index..index + 1))
        .collect();
    parse_with_spans(located)
}
