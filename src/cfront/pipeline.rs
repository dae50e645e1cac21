//! Processing pipeline
//!
//! Chains the stages into one call and names the outputs the CLI can ask for:
//!
//!     source --tokenize--> tokens --parse--> parse tree --build--> Program
//!
//! A [`ProcessingSpec`] such as `ast-treeviz` or `tokens-json` selects the stage to
//! stop at and the format to render it in. Every stage error is wrapped in
//! [`ExecutionError`], which keeps the failing source offset when there is one.

pub mod config;
pub mod executor;

pub use config::{ProcessingSpec, Stage};
pub use executor::{ExecutionError, ExecutionOutput, PipelineExecutor};

use crate::cfront::ast::Program;

/// Tokenize, parse and build `source` in one go
pub fn compile(source: &str) -> Result<Program, ExecutionError> {
    PipelineExecutor::new().build(source)
}
