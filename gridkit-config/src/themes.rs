//! Color theme definitions for gridkit widgets.
//!
//! A [`Theme`] answers two kinds of lookup: a color by semantic name
//! ([`ColorName`]) and a numeric setting by name ([`SizeName`]). Widgets never
//! hold theme colors directly; they ask the current theme each time they paint.

use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// A color in non-premultiplied RGBA format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn as_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Parse `RRGGBB` or `RRGGBBAA`, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }
}

/// Semantic color names a widget can ask the theme for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    Background,
    Button,
    Text,
    DisabledText,
    Placeholder,
    Primary,
}

/// Numeric theme settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeName {
    /// Text size in points
    Text,
    /// Standard padding between elements
    Padding,
    /// Number of space advances one tab stop spans
    TabWidth,
}

/// Widget color theme plus the numeric settings text layout depends on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub button: Color,
    pub text: Color,
    pub disabled_text: Color,
    pub placeholder: Color,
    pub primary: Color,

    pub text_size: f32,
    pub padding: f32,
    pub tab_width: u32,
}

impl Theme {
    /// Look up a color by semantic name.
    pub fn color(&self, name: ColorName) -> Color {
        match name {
            ColorName::Background => self.background,
            ColorName::Button => self.button,
            ColorName::Text => self.text,
            ColorName::DisabledText => self.disabled_text,
            ColorName::Placeholder => self.placeholder,
            ColorName::Primary => self.primary,
        }
    }

    /// Look up a numeric setting by name.
    pub fn size(&self, name: SizeName) -> f32 {
        match name {
            SizeName::Text => self.text_size,
            SizeName::Padding => self.padding,
            SizeName::TabWidth => self.tab_width as f32,
        }
    }

    /// Dark theme (the default)
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color::rgb(0x42, 0x42, 0x42),
            button: Color::rgb(0x21, 0x21, 0x21),
            text: Color::rgb(0xff, 0xff, 0xff),
            disabled_text: Color::rgb(0x60, 0x60, 0x60),
            placeholder: Color::rgb(0xb2, 0xb2, 0xb2),
            primary: Color::rgb(0x21, 0x96, 0xf3),
            text_size: 14.0,
            padding: 4.0,
            tab_width: 4,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color::rgb(0xf5, 0xf5, 0xf5),
            button: Color::rgb(0xd9, 0xd9, 0xd9),
            text: Color::rgb(0x21, 0x21, 0x21),
            disabled_text: Color::rgb(0x80, 0x80, 0x80),
            placeholder: Color::rgb(0x88, 0x88, 0x88),
            primary: Color::rgb(0x9f, 0xa8, 0xda),
            text_size: 14.0,
            padding: 4.0,
            tab_width: 4,
        }
    }

    /// Dracula theme
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            background: Color::rgb(40, 42, 54),
            button: Color::rgb(68, 71, 90),
            text: Color::rgb(248, 248, 242),
            disabled_text: Color::rgb(98, 114, 164),
            placeholder: Color::rgb(98, 114, 164),
            primary: Color::rgb(189, 147, 249),
            text_size: 14.0,
            padding: 4.0,
            tab_width: 4,
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            background: Color::rgb(46, 52, 64),
            button: Color::rgb(59, 66, 82),
            text: Color::rgb(216, 222, 233),
            disabled_text: Color::rgb(76, 86, 106),
            placeholder: Color::rgb(76, 86, 106),
            primary: Color::rgb(136, 192, 208),
            text_size: 14.0,
            padding: 4.0,
            tab_width: 4,
        }
    }

    /// Get a built-in theme by name (case-insensitive)
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "dracula" => Some(Self::dracula()),
            "nord" => Some(Self::nord()),
            _ => None,
        }
    }

    /// Names of all built-in themes
    pub fn available_themes() -> Vec<&'static str> {
        vec!["dark", "light", "dracula", "nord"]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

static CURRENT_THEME: LazyLock<RwLock<Arc<Theme>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Theme::default())));

/// The theme the application is currently painting with.
pub fn current_theme() -> Arc<Theme> {
    Arc::clone(&CURRENT_THEME.read())
}

/// Replace the application theme. Widgets pick it up on their next refresh.
pub fn set_current_theme(theme: Theme) {
    log::info!("Switching theme to '{}'", theme.name);
    *CURRENT_THEME.write() = Arc::new(theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lookup_by_name() {
        let theme = Theme::dark();
        assert_eq!(theme.color(ColorName::Text), Color::WHITE);
        assert_eq!(theme.color(ColorName::Button), Color::rgb(0x21, 0x21, 0x21));
        assert_eq!(theme.size(SizeName::TabWidth), 4.0);
    }

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert_eq!(Theme::by_name("Light"), Some(Theme::light()));
        assert_eq!(
            Theme::by_name("NORD").map(|t| t.name),
            Some("nord".to_string())
        );
        assert!(Theme::by_name("solarized").is_none());
        for name in Theme::available_themes() {
            assert!(Theme::by_name(name).is_some(), "{name} should resolve");
        }
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#ff8000"), Some(Color::rgb(255, 128, 0)));
        assert_eq!(
            Color::from_hex("00000080"),
            Some(Color::rgba(0, 0, 0, 0x80))
        );
        assert_eq!(Color::from_hex("fff"), None);
        assert_eq!(Color::from_hex("zz0000"), None);
        assert_eq!(Color::from_hex("ééé"), None);
    }

    #[test]
    fn test_color_alpha_defaults_to_opaque() {
        let c: Color = serde_yaml_ng::from_str("{r: 1, g: 2, b: 3}").unwrap();
        assert_eq!(c, Color::rgb(1, 2, 3));
        assert!(Color::TRANSPARENT.is_transparent());
    }
}
