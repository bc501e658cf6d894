//! Widget configuration.
//!
//! `Config` is the on-disk YAML document. It names a built-in theme and carries
//! the few settings that override theme values or set widget defaults.

mod persistence;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::themes::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Built-in theme name (see `Theme::available_themes`)
    #[serde(default = "crate::defaults::theme")]
    pub theme: String,

    /// Font family; `None` uses the system monospace family
    #[serde(default = "crate::defaults::font_family")]
    pub font_family: Option<String>,

    /// Font size in points
    #[serde(default = "crate::defaults::font_size")]
    pub font_size: f32,

    /// Overrides the theme's tab width (in space advances) when set
    #[serde(default)]
    pub tab_width: Option<u32>,

    /// Show the line number gutter on new text grids
    #[serde(default = "crate::defaults::line_numbers")]
    pub line_numbers: bool,

    /// Show whitespace markers on new text grids
    #[serde(default = "crate::defaults::whitespace")]
    pub whitespace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: crate::defaults::theme(),
            font_family: crate::defaults::font_family(),
            font_size: crate::defaults::font_size(),
            tab_width: None,
            line_numbers: crate::defaults::line_numbers(),
            whitespace: crate::defaults::whitespace(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_tab_width(mut self, tab_width: u32) -> Self {
        self.tab_width = Some(tab_width);
        self
    }

    /// Check field values that serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.font_size > 0.0) {
            return Err(ConfigError::Validation(format!(
                "font_size must be positive, got {}",
                self.font_size
            )));
        }
        if self.tab_width == Some(0) {
            return Err(ConfigError::Validation(
                "tab_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the named built-in theme, applying configured overrides.
    pub fn resolve_theme(&self) -> Result<Theme, ConfigError> {
        let mut theme = Theme::by_name(&self.theme)
            .ok_or_else(|| ConfigError::UnknownTheme(self.theme.clone()))?;
        if let Some(tab_width) = self.tab_width {
            theme.tab_width = tab_width;
        }
        theme.text_size = self.font_size;
        Ok(theme)
    }
}
