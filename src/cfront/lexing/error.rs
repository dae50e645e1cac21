//! Error type for tokenization

use std::fmt;

/// No token pattern matches at `offset`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// The first character that could not be tokenized
    pub character: char,
    /// Byte offset of that character in the source
    pub offset: usize,
}

impl LexError {
    /// Build the error for the character starting at `offset` in `source`
    pub fn at(source: &str, offset: usize) -> Self {
        let character = source
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or_default();
        Self { character, offset }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unexpected character {:?} at offset {}",
            self.character, self.offset
        )
    }
}

impl std::error::Error for LexError {}
