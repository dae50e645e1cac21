//! Processing specifications
//!
//! A spec is written `<stage>-<format>`: `tokens-simple`, `parse-indented`, `ast-dot`.
//! Token formats are checked here; tree formats are looked up in the executor's
//! registry when the spec runs.

use crate::cfront::formats::TOKEN_FORMATS;
use crate::cfront::pipeline::executor::ExecutionError;
use std::fmt;

/// Where processing stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Tokens,
    /// Concrete parse tree
    Parse,
    Ast,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Tokens => "tokens",
            Stage::Parse => "parse",
            Stage::Ast => "ast",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokens" => Some(Stage::Tokens),
            "parse" => Some(Stage::Parse),
            "ast" => Some(Stage::Ast),
            _ => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stage plus output format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: Stage,
    pub format: String,
}

impl ProcessingSpec {
    pub fn new(stage: Stage, format: impl Into<String>) -> Result<Self, ExecutionError> {
        let format = format.into();
        if format.is_empty() {
            return Err(ExecutionError::InvalidSpec(format!(
                "missing format for stage '{}'",
                stage
            )));
        }
        if stage == Stage::Tokens && !TOKEN_FORMATS.contains(&format.as_str()) {
            return Err(ExecutionError::InvalidSpec(format!(
                "format '{}' does not apply to tokens (expected one of: {})",
                format,
                TOKEN_FORMATS.join(", ")
            )));
        }
        Ok(Self { stage, format })
    }

    /// Parse a spec string like "ast-treeviz" or "tokens-json"
    pub fn from_string(spec: &str) -> Result<Self, ExecutionError> {
        let (stage, format) = spec
            .split_once('-')
            .ok_or_else(|| ExecutionError::InvalidSpec(format!("'{}' is not <stage>-<format>", spec)))?;
        let stage = Stage::from_name(stage).ok_or_else(|| {
            ExecutionError::InvalidSpec(format!(
                "unknown stage '{}' (expected tokens, parse or ast)",
                stage
            ))
        })?;
        Self::new(stage, format)
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stage, self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let spec = ProcessingSpec::from_string("ast-treeviz").unwrap();
        assert_eq!(spec.stage, Stage::Ast);
        assert_eq!(spec.format, "treeviz");

        let spec = ProcessingSpec::from_string("tokens-json").unwrap();
        assert_eq!(spec.stage, Stage::Tokens);
        assert_eq!(spec.to_string(), "tokens-json");

        let spec = ProcessingSpec::from_string("parse-indented").unwrap();
        assert_eq!(spec.stage, Stage::Parse);
    }

    #[test]
    fn test_invalid_specs() {
        assert!(ProcessingSpec::from_string("ast").is_err());
        assert!(ProcessingSpec::from_string("ast-").is_err());
        assert!(ProcessingSpec::from_string("bytecode-json").is_err());
        assert!(ProcessingSpec::from_string("tokens-treeviz").is_err());
    }

    #[test]
    fn test_tree_formats_are_not_checked_here() {
        assert!(ProcessingSpec::from_string("ast-unknown").is_ok());
    }
}
