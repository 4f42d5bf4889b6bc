//! Configuration for docfx mapping and output.
//!
//! The text layout and output format knobs live in `defaults/docfx.default.toml`,
//! which is compiled in. A [`Loader`] starts from those values and stacks user files,
//! `DOCFX__*` environment variables and explicit overrides on top, later layers
//! winning, before producing a [`DocfxConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/docfx.default.toml");

/// Prefix of environment variables read by [`Loader::with_env`].
pub const ENV_PREFIX: &str = "DOCFX";

/// Top-level configuration consumed by docfx.
#[derive(Debug, Clone, Deserialize)]
pub struct DocfxConfig {
    pub text: TextConfig,
    pub output: OutputConfig,
}

/// Knobs of the plain-text description printer.
#[derive(Debug, Clone, Deserialize)]
pub struct TextConfig {
    pub prefix: String,
    pub code_prefix: String,
    /// Wrap width; `0` disables wrapping.
    pub width: usize,
}

/// How a mapped package is serialized.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Layered configuration builder, seeded with the compiled-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Stacks a TOML file on top; building fails if it does not exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Same as [`Loader::with_file`], but an absent file is skipped.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Stacks `DOCFX__SECTION__KEY` variables on top, e.g. `DOCFX__OUTPUT__PRETTY=false`.
    pub fn with_env(mut self) -> Self {
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true);
        self.builder = self.builder.add_source(env);
        self
    }

    /// Pins one dotted key, e.g. `text.width`, above every other layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merges the layers and deserializes the result.
    pub fn build(self) -> Result<DocfxConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration exactly as compiled in.
pub fn load_defaults() -> Result<DocfxConfig, ConfigError> {
    Loader::default().build()
}
