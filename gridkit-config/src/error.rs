//! Typed error variants for the gridkit-config crate.
//!
//! `Config::load_from` and `Config::save_to` return `anyhow::Result`; the
//! underlying `ConfigError` can be recovered with `downcast_ref` by callers
//! that want to match on a specific failure mode.

use thiserror::Error;

/// Errors that can occur when loading, saving or resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Config validation error: {0}")]
    Validation(String),

    /// The configured theme name does not match any built-in theme.
    #[error("Unknown theme '{0}'")]
    UnknownTheme(String),
}
