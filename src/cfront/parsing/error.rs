//! Parse errors
//!
//! `ParseError` is the error type the chumsky grammar runs with, so expected-token sets
//! are collected and merged by the combinators themselves. Expectations are recorded as
//! token kinds: the grammar never cares about a specific identifier or number.

use crate::cfront::lexing::{Token, TokenKind};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

/// Label of the error for brackets nested past
/// [`MAX_NESTING_DEPTH`](crate::cfront::parsing::MAX_NESTING_DEPTH)
pub const NESTING_LABEL: &str = "at most 128 nested brackets";

/// Something the parser would have accepted at the failing position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Expected {
    Token(TokenKind),
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// The token stream does not match the grammar
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub expected: BTreeSet<Expected>,
    /// `None` when the input ended early
    pub found: Option<Token>,
    /// Byte range of the offending token, or token indices when parsed without spans
    pub span: Range<usize>,
    /// Name of the construct being parsed when the error occurred, if known
    pub label: Option<&'static str>,
}

impl ParseError {
    /// Error for a token (or end of input) that is not one of `expected`
    pub fn unexpected<I>(span: Range<usize>, expected: I, found: Option<Token>) -> Self
    where
        I: IntoIterator<Item = TokenKind>,
    {
        Self {
            expected: expected.into_iter().map(Expected::Token).collect(),
            found,
            span,
            label: None,
        }
    }

    /// Error for an opening bracket nested too deeply
    pub fn too_deep(span: Range<usize>, found: Token) -> Self {
        Self {
            expected: BTreeSet::new(),
            found: Some(found),
            span,
            label: Some(NESTING_LABEL),
        }
    }

    /// Position of the failure (start of the offending span)
    pub fn position(&self) -> usize {
        self.span.start
    }

    fn describe_found(&self) -> String {
        match &self.found {
            Some(token) => token.to_string(),
            None => "end of input".to_string(),
        }
    }

    fn describe_expected(&self) -> String {
        self.expected
            .iter()
            .map(Expected::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.label, self.expected.is_empty()) {
            (Some(label), true) => write!(f, "Expected {}", label)?,
            (Some(label), false) => write!(
                f,
                "Expected {} (one of {{{}}})",
                label,
                self.describe_expected()
            )?,
            (None, false) => write!(f, "Expected one of {{{}}}", self.describe_expected())?,
            (None, true) => write!(f, "Unexpected token")?,
        }
        write!(
            f,
            ", found {} at position {}",
            self.describe_found(),
            self.position()
        )
    }
}

impl std::error::Error for ParseError {}

impl chumsky::Error<Token> for ParseError {
    type Span = Range<usize>;
    type Label = &'static str;

    fn expected_input_found<Iter: IntoIterator<Item = Option<Token>>>(
        span: Self::Span,
        expected: Iter,
        found: Option<Token>,
    ) -> Self {
        Self {
            expected: expected
                .into_iter()
                .map(|token| match token {
                    Some(token) => Expected::Token(token.kind),
                    None => Expected::EndOfInput,
                })
                .collect(),
            found,
            span,
            label: None,
        }
    }

    fn with_label(mut self, label: Self::Label) -> Self {
        self.label.get_or_insert(label);
        self
    }

    fn merge(mut self, other: Self) -> Self {
        self.expected.extend(other.expected);
        self
    }
}
