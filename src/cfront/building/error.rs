//! Build errors

use crate::cfront::lexing::Token;
use crate::cfront::parsing::NodeType;
use std::fmt;
use std::ops::Range;

/// A parse tree whose shape does not match its production
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    UnexpectedNode {
        expected: NodeType,
        found: NodeType,
    },
    MalformedProduction {
        production: NodeType,
        reason: &'static str,
    },
    /// A chain must have exactly one more operand than operators
    OperandMismatch {
        production: NodeType,
        operators: usize,
        operands: usize,
    },
    UnexpectedOperator {
        production: NodeType,
        found: Token,
        span: Range<usize>,
    },
    /// Numeric literal whose integer part does not fit in an i64
    InvalidNumber {
        lexeme: String,
        span: Range<usize>,
    },
}

impl BuildError {
    /// Source position of the offending token, when the error points at one
    pub fn position(&self) -> Option<usize> {
        match self {
            BuildError::UnexpectedOperator { span, .. } | BuildError::InvalidNumber { span, .. } => {
                Some(span.start)
            }
            _ => None,
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::UnexpectedNode { expected, found } => {
                write!(f, "Expected a {} node, found {}", expected, found)
            }
            BuildError::MalformedProduction { production, reason } => {
                write!(f, "Malformed {}: {}", production, reason)
            }
            BuildError::OperandMismatch {
                production,
                operators,
                operands,
            } => write!(
                f,
                "Malformed {}: {} operators need {} operands, found {}",
                production,
                operators,
                operators + 1,
                operands
            ),
            BuildError::UnexpectedOperator {
                production, found, ..
            } => write!(f, "Unexpected operator {} in {}", found, production),
            BuildError::InvalidNumber { lexeme, .. } => {
                write!(f, "Number literal '{}' does not fit in 64 bits", lexeme)
            }
        }
    }
}

impl std::error::Error for BuildError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfront::lexing::TokenKind;

    #[test]
    fn test_display() {
        let err = BuildError::OperandMismatch {
            production: NodeType::Term,
            operators: 2,
            operands: 2,
        };
        assert_eq!(
            err.to_string(),
            "Malformed term: 2 operators need 3 operands, found 2"
        );

        let err = BuildError::UnexpectedOperator {
            production: NodeType::Expression,
            found: Token::new(TokenKind::Times, "*"),
            span: 4..5,
        };
        assert_eq!(err.to_string(), "Unexpected operator '*' in expression");
        assert_eq!(err.position(), Some(4));
    }

    #[test]
    fn test_shape_errors_have_no_position() {
        let err = BuildError::UnexpectedNode {
            expected: NodeType::Start,
            found: NodeType::Factor,
        };
        assert_eq!(err.position(), None);
        assert_eq!(err.to_string(), "Expected a start node, found factor");
    }
}
