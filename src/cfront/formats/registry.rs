//! Format registry for tree serialization
//!
//! This module provides a pluggable registry system for serialization formats.
//! Each format implements the `Formatter` trait and can be registered with `FormatRegistry`.

use crate::cfront::ast::AstSnapshot;
use crate::cfront::config::InspectSettings;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
    /// Tree nested deeper than the format can serialize
    TooDeep { depth: usize, limit: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::TooDeep { depth, limit } => write!(
                f,
                "Tree is {depth} levels deep, this format supports at most {limit}"
            ),
        }
    }
}

impl std::error::Error for FormatError {}

/// Deepest snapshot the serde based formats accept
///
/// serde serializers recurse once per nesting level. The limit is above the depth of any
/// parse tree within the bracket nesting limit, so only long operator chains in the AST
/// hit it. Text formats walk the tree with an explicit stack and have no limit.
pub const MAX_SERDE_DEPTH: usize = 512;

/// Refuse snapshots deeper than [`MAX_SERDE_DEPTH`]
pub(crate) fn check_serde_depth(snapshot: &AstSnapshot) -> Result<(), FormatError> {
    let depth = snapshot.depth();
    if depth > MAX_SERDE_DEPTH {
        return Err(FormatError::TooDeep {
            depth,
            limit: MAX_SERDE_DEPTH,
        });
    }
    Ok(())
}

/// Trait for tree formatters
///
/// Implementors turn a snapshot into a string. Rendering must be deterministic: the same
/// snapshot always gives byte-identical output.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "treeviz", "json")
    fn name(&self) -> &str;

    fn serialize(&self, snapshot: &AstSnapshot) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of tree formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

static DEFAULT_REGISTRY: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::with_defaults);

/// Shared registry holding the built-in formatters with default settings
pub fn default_registry() -> &'static FormatRegistry {
    &DEFAULT_REGISTRY
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a snapshot using the specified format
    pub fn serialize(&self, snapshot: &AstSnapshot, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(snapshot)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Format names with their descriptions, sorted by name
    pub fn describe_formats(&self) -> Vec<(String, String)> {
        self.list_formats()
            .into_iter()
            .map(|name| {
                let description = self
                    .get(&name)
                    .map(|f| f.description().to_string())
                    .unwrap_or_default();
                (name, description)
            })
            .collect()
    }

    /// Create a registry with default formatters
    pub fn with_defaults() -> Self {
        Self::with_settings(&InspectSettings::default())
    }

    /// Create a registry whose text formatters follow the given settings
    pub fn with_settings(settings: &InspectSettings) -> Self {
        let mut registry = Self::new();

        registry.register(super::TreevizFormatter::new(settings.label_width));
        registry.register(super::IndentedFormatter::new(settings.indent_width));
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry.register(super::DotFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
