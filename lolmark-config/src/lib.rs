//! Shared configuration loader for the lolmark toolchain.
//!
//! `defaults/lolmark.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`LolmarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use lolmark_parser::lolmark::pipeline::PipelineOptions;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/lolmark.default.toml");

/// Top-level configuration consumed by lolmark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct LolmarkConfig {
    pub resolution: ResolutionConfig,
    pub inspect: InspectConfig,
}

/// Variable resolution knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolutionConfig {
    pub fail_fast: bool,
}

/// Controls inspect output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub format: String,
    pub show_line_numbers: bool,
}

impl LolmarkConfig {
    /// Pipeline switches derived from the configuration. Resolution is always on here;
    /// callers turn it off per run.
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            fail_fast: self.resolution.fail_fast,
            ..PipelineOptions::default()
        }
    }

    /// Formatter parameters for the inspect output.
    pub fn format_params(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();
        if self.inspect.show_line_numbers {
            params.insert("show-linum".to_string(), "true".to_string());
        }
        params
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
    pub fn build(self) -> Result<LolmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<LolmarkConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(!config.resolution.fail_fast);
        assert_eq!(config.inspect.format, "treeviz");
        assert!(!config.inspect.show_line_numbers);
        assert_eq!(config.pipeline_options(), PipelineOptions::default());
        assert!(config.format_params().is_empty());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("resolution.fail_fast", true)
            .expect("override to apply")
            .set_override("inspect.show_line_numbers", true)
            .expect("override to apply")
            .build()
            .expect("config to build");

        let options = config.pipeline_options();
        assert!(options.fail_fast);
        assert!(options.resolve);
        assert_eq!(
            config.format_params().get("show-linum").map(String::as_str),
            Some("true")
        );
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let path =
            std::env::temp_dir().join(format!("lolmark-config-{}.toml", std::process::id()));
        fs::write(&path, "[inspect]\nformat = \"json\"\n").expect("write config");

        let config = Loader::new().with_file(&path).build();
        let _ = fs::remove_file(&path);

        let config = config.expect("config to build");
        assert_eq!(config.inspect.format, "json");
        assert!(!config.inspect.show_line_numbers);
    }

    #[test]
    fn optional_file_may_be_missing() {
        let missing = std::env::temp_dir().join("lolmark-config-does-not-exist.toml");
        let config = Loader::new()
            .with_optional_file(&missing)
            .build()
            .expect("missing optional file is ignored");
        assert_eq!(config.inspect.format, "treeviz");
    }

    #[test]
    fn required_file_must_exist() {
        let missing = std::env::temp_dir().join("lolmark-config-does-not-exist.toml");
        assert!(Loader::new().with_file(&missing).build().is_err());
    }
}
