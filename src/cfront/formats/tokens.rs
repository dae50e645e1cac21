//! Token stream formats
//!
//! `simple` lists one token per line with its terminal name and lexeme; `json` emits an
//! array of `{kind, lexeme, span}` objects.

use crate::cfront::formats::registry::FormatError;
use crate::cfront::lexing::TokenLocation;
use serde::Serialize;

/// Names accepted by [`serialize_tokens`], sorted
pub const TOKEN_FORMATS: &[&str] = &["json", "simple"];

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    lexeme: &'a str,
    start: usize,
    end: usize,
}

/// `Type: NAME         Value: lexeme`, one line per token
pub fn tokens_to_simple(tokens: &[TokenLocation]) -> String {
    tokens
        .iter()
        .map(|(token, _)| format!("Type: {:12} Value: {}\n", token.kind.name(), token.lexeme))
        .collect()
}

pub fn tokens_to_json(tokens: &[TokenLocation]) -> Result<String, FormatError> {
    let records: Vec<TokenRecord<'_>> = tokens
        .iter()
        .map(|(token, span)| TokenRecord {
            kind: token.kind.name(),
            lexeme: &token.lexeme,
            start: span.start,
            end: span.end,
        })
        .collect();
    serde_json::to_string_pretty(&records)
        .map_err(|err| FormatError::SerializationError(err.to_string()))
}

pub fn serialize_tokens(tokens: &[TokenLocation], format: &str) -> Result<String, FormatError> {
    match format {
        "simple" => Ok(tokens_to_simple(tokens)),
        "json" => tokens_to_json(tokens),
        other => Err(FormatError::FormatNotFound(other.to_string())),
    }
}
