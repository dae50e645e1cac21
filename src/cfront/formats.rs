//! Output format implementations for trees and token streams
//!
//! Tree formats render an [`AstSnapshot`](crate::cfront::ast::AstSnapshot), so the same
//! formatter serves both ASTs and concrete parse trees:
//! - treeviz and indented listings for reading
//! - json and yaml for tools
//! - dot for graph visualization
//!
//! Token streams have their own small set of formats in [tokens].

pub mod dot;
pub mod indented;
pub mod json;
pub mod registry;
pub mod tokens;
pub mod treeviz;
pub mod yaml;

pub use dot::{to_dot_str, DotFormatter};
pub use indented::{to_indented_str, IndentedFormatter};
pub use json::JsonFormatter;
pub use registry::{default_registry, FormatError, FormatRegistry, Formatter, MAX_SERDE_DEPTH};
pub use tokens::{serialize_tokens, TOKEN_FORMATS};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
pub use yaml::YamlFormatter;
