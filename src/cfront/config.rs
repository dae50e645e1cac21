//! Configuration loader for cfront.
//!
//! `defaults/cfront.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Callers layer user files and CLI overrides on top
//! of those defaults via [`Loader`] before deserializing into [`Settings`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/cfront.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Settings {
    pub inspect: InspectSettings,
    pub tokens: TokenSettings,
}

/// Controls tree output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InspectSettings {
    pub format: String,
    pub indent_width: usize,
    pub label_width: usize,
}

impl Default for InspectSettings {
    fn default() -> Self {
        Self {
            format: "treeviz".to_string(),
            indent_width: crate::cfront::formats::indented::DEFAULT_INDENT_WIDTH,
            label_width: crate::cfront::formats::treeviz::DEFAULT_LABEL_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenSettings {
    pub format: String,
}

impl Default for TokenSettings {
    fn default() -> Self {
        Self {
            format: "simple".to_string(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<Settings, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings from the embedded defaults only
pub fn load_defaults() -> Result<Settings, ConfigError> {
    Loader::new().build()
}
