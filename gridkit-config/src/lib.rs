//! Theme and configuration system for gridkit.
//!
//! This crate provides:
//!
//! - RGBA colors and named theme lookups (colors and numeric sizes)
//! - Built-in themes and the process-wide current theme
//! - YAML configuration loading, saving and default values

pub mod config;
pub mod defaults;
pub mod error;
pub mod themes;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use themes::{Color, ColorName, SizeName, Theme, current_theme, set_current_theme};
