//! Pipeline executor that runs processing specs

use crate::cfront::ast::{snapshot_from_program, AstSnapshot, Program};
use crate::cfront::building::{AstTreeBuilder, BuildError};
use crate::cfront::config::InspectSettings;
use crate::cfront::formats::{serialize_tokens, FormatError, FormatRegistry};
use crate::cfront::lexing::{tokenize_with_spans, LexError, TokenLocation};
use crate::cfront::parsing::{parse_with_spans, ParseError, ParseNode};
use crate::cfront::pipeline::config::{ProcessingSpec, Stage};
use std::fmt;

/// Errors during pipeline execution
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionError {
    Lex(LexError),
    Parse(ParseError),
    Build(BuildError),
    Format(FormatError),
    InvalidSpec(String),
}

impl ExecutionError {
    /// Byte offset in the source where processing failed, if known
    pub fn offset(&self) -> Option<usize> {
        match self {
            ExecutionError::Lex(err) => Some(err.offset),
            ExecutionError::Parse(err) => Some(err.position()),
            ExecutionError::Build(err) => err.position(),
            ExecutionError::Format(_) | ExecutionError::InvalidSpec(_) => None,
        }
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionError::Lex(err) => write!(f, "Lexing failed: {}", err),
            ExecutionError::Parse(err) => write!(f, "Parsing failed: {}", err),
            ExecutionError::Build(err) => write!(f, "Building failed: {}", err),
            ExecutionError::Format(err) => write!(f, "{}", err),
            ExecutionError::InvalidSpec(msg) => write!(f, "Invalid processing spec: {}", msg),
        }
    }
}

impl std::error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExecutionError::Lex(err) => Some(err),
            ExecutionError::Parse(err) => Some(err),
            ExecutionError::Build(err) => Some(err),
            ExecutionError::Format(err) => Some(err),
            ExecutionError::InvalidSpec(_) => None,
        }
    }
}

impl From<LexError> for ExecutionError {
    fn from(err: LexError) -> Self {
        ExecutionError::Lex(err)
    }
}

impl From<ParseError> for ExecutionError {
    fn from(err: ParseError) -> Self {
        ExecutionError::Parse(err)
    }
}

impl From<BuildError> for ExecutionError {
    fn from(err: BuildError) -> Self {
        ExecutionError::Build(err)
    }
}

impl From<FormatError> for ExecutionError {
    fn from(err: FormatError) -> Self {
        ExecutionError::Format(err)
    }
}

/// Output from pipeline execution
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutput {
    Tokens(Vec<TokenLocation>),
    ParseTree(ParseNode),
    Program(Program),
}

impl ExecutionOutput {
    /// Tree view of the output; token streams have none
    pub fn snapshot(&self) -> Option<AstSnapshot> {
        match self {
            ExecutionOutput::Tokens(_) => None,
            ExecutionOutput::ParseTree(tree) => Some(AstSnapshot::from(tree)),
            ExecutionOutput::Program(program) => Some(snapshot_from_program(program)),
        }
    }
}

/// Runs the stages and renders their output
pub struct PipelineExecutor {
    registry: FormatRegistry,
}

impl PipelineExecutor {
    /// Create executor with the default formatters
    pub fn new() -> Self {
        Self::with_registry(FormatRegistry::with_defaults())
    }

    /// Create executor whose formatters follow the given settings
    pub fn with_settings(settings: &InspectSettings) -> Self {
        Self::with_registry(FormatRegistry::with_settings(settings))
    }

    /// Create executor with custom registry
    pub fn with_registry(registry: FormatRegistry) -> Self {
        Self { registry }
    }

    pub fn tokenize(&self, source: &str) -> Result<Vec<TokenLocation>, ExecutionError> {
        Ok(tokenize_with_spans(source)?)
    }

    pub fn parse(&self, source: &str) -> Result<ParseNode, ExecutionError> {
        Ok(parse_with_spans(self.tokenize(source)?)?)
    }

    pub fn build(&self, source: &str) -> Result<Program, ExecutionError> {
        Ok(AstTreeBuilder::new().build(self.parse(source)?)?)
    }

    /// Run the pipeline up to the spec's stage
    pub fn execute(
        &self,
        spec: &ProcessingSpec,
        source: &str,
    ) -> Result<ExecutionOutput, ExecutionError> {
        match spec.stage {
            Stage::Tokens => self.tokenize(source).map(ExecutionOutput::Tokens),
            Stage::Parse => self.parse(source).map(ExecutionOutput::ParseTree),
            Stage::Ast => self.build(source).map(ExecutionOutput::Program),
        }
    }

    /// Run the pipeline and render the result in the spec's format
    pub fn execute_and_serialize(
        &self,
        spec: &ProcessingSpec,
        source: &str,
    ) -> Result<String, ExecutionError> {
        if spec.stage != Stage::Tokens && !self.registry.has(&spec.format) {
            return Err(FormatError::FormatNotFound(spec.format.clone()).into());
        }

        let output = self.execute(spec, source)?;
        let rendered = match (&output, output.snapshot()) {
            (ExecutionOutput::Tokens(tokens), _) => serialize_tokens(tokens, &spec.format)?,
            (_, Some(snapshot)) => self.registry.serialize(&snapshot, &spec.format)?,
            (_, None) => {
                return Err(ExecutionError::InvalidSpec(format!(
                    "no tree to render for '{}'",
                    spec
                )))
            }
        };
        Ok(rendered)
    }

    /// List tree format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        self.registry.list_formats()
    }

    /// Get the registry
    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }
}

impl Default for PipelineExecutor {
    fn default() -> Self {
        Self::new()
    }
}
