//! Token definitions for cfront
//!
//! This module defines all the tokens that can be produced by the lexer.
//! Token kinds are defined using the logos derive macro; a [`Token`] pairs a kind with the
//! exact source text it matched.
use logos::Logos;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A token together with its byte range in the source
pub type TokenLocation = (Token, Range<usize>);

/// All possible token kinds
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[logos(skip r"\s+|//[^\n]*")]
pub enum TokenKind {
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    // Integer or decimal; the fraction may be empty ("5.")
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,

    // Arithmetic
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Times,
    #[token("/")]
    Divide,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // Preprocessor / template punctuation, tokenized but never parsed
    #[token("#")]
    Hash,
    #[token("<")]
    AngleOpen,
    #[token(">")]
    AngleClose,

    // No escapes: the literal ends at the next quote
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    // Statements
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Assign,
    #[token(",")]
    Comma,
}

impl TokenKind {
    /// Terminal name as used in the grammar and in token listings
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Hash => "HASH",
            TokenKind::AngleOpen => "ANGLE_OPEN",
            TokenKind::AngleClose => "ANGLE_CLOSE",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Comma => "COMMA",
        }
    }

    /// Check if this token is one of the four arithmetic operators
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Times | TokenKind::Divide
        )
    }

    /// Check if this token is punctuation the grammar tokenizes but never parses
    pub fn is_unparsed(&self) -> bool {
        matches!(
            self,
            TokenKind::Hash
                | TokenKind::AngleOpen
                | TokenKind::AngleClose
                | TokenKind::StringLiteral
                | TokenKind::Comma
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::StringLiteral => write!(f, "string literal"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Times => write!(f, "'*'"),
            TokenKind::Divide => write!(f, "'/'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Hash => write!(f, "'#'"),
            TokenKind::AngleOpen => write!(f, "'<'"),
            TokenKind::AngleClose => write!(f, "'>'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::Comma => write!(f, "','"),
        }
    }
}

/// A classified piece of source text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Number | TokenKind::StringLiteral => {
                write!(f, "{} '{}'", self.kind, self.lexeme)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        TokenKind::lexer(source).filter_map(|r| r.ok()).collect()
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("# < > { } ; = ,"),
            vec![
                TokenKind::Hash,
                TokenKind::AngleOpen,
                TokenKind::AngleClose,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Semicolon,
                TokenKind::Assign,
                TokenKind::Comma
            ]
        );
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(
            kinds("(a+b)-c*d/e"),
            vec![
                TokenKind::LParen,
                TokenKind::Identifier,
                TokenKind::Plus,
                TokenKind::Identifier,
                TokenKind::RParen,
                TokenKind::Minus,
                TokenKind::Identifier,
                TokenKind::Times,
                TokenKind::Identifier,
                TokenKind::Divide,
                TokenKind::Identifier
            ]
        );
    }

    #[test]
    fn test_numbers_take_longest_match() {
        let mut lexer = TokenKind::lexer("12.5 7 3.");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Number)));
        assert_eq!(lexer.slice(), "12.5");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Number)));
        assert_eq!(lexer.slice(), "7");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Number)));
        assert_eq!(lexer.slice(), "3.");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_identifier_with_digits_and_underscores() {
        let mut lexer = TokenKind::lexer("_tmp1 x2y");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Identifier)));
        assert_eq!(lexer.slice(), "_tmp1");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Identifier)));
        assert_eq!(lexer.slice(), "x2y");
    }

    #[test]
    fn test_comment_versus_division() {
        assert_eq!(
            kinds("a / b // trailing / comment"),
            vec![TokenKind::Identifier, TokenKind::Divide, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_string_literal_stops_at_first_quote() {
        let mut lexer = TokenKind::lexer(r#""hello" "world""#);
        assert_eq!(lexer.next(), Some(Ok(TokenKind::StringLiteral)));
        assert_eq!(lexer.slice(), "\"hello\"");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::StringLiteral)));
        assert_eq!(lexer.slice(), "\"world\"");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_names_and_descriptions() {
        assert_eq!(TokenKind::AngleOpen.name(), "ANGLE_OPEN");
        assert_eq!(TokenKind::StringLiteral.name(), "STRING_LITERAL");
        assert_eq!(TokenKind::LBrace.to_string(), "'{'");
        assert_eq!(TokenKind::Identifier.to_string(), "identifier");
        assert_eq!(
            Token::new(TokenKind::Number, "42").to_string(),
            "number '42'"
        );
        assert_eq!(Token::new(TokenKind::Semicolon, ";").to_string(), "';'");
    }

    #[test]
    fn test_token_predicates() {
        assert!(TokenKind::Divide.is_operator());
        assert!(!TokenKind::Assign.is_operator());
        assert!(TokenKind::Hash.is_unparsed());
        assert!(TokenKind::Comma.is_unparsed());
        assert!(!TokenKind::Semicolon.is_unparsed());
    }
}
