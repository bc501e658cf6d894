//! Cell styles for the text grid.

use std::fmt::Debug;
use std::sync::{Arc, LazyLock};

use gridkit_config::{Color, ColorName, current_theme};

/// A style that can be applied to a text grid cell.
///
/// Either color may be absent, in which case the renderer falls back to the
/// theme text color for the foreground and transparent for the background.
pub trait TextGridStyle: Debug + Send + Sync {
    /// Color the cell should use for its text.
    fn text_color(&self) -> Option<Color>;

    /// Color the cell should use for its background.
    fn background_color(&self) -> Option<Color>;
}

/// A plain style value for callers that do not need their own style type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomTextGridStyle {
    pub fg_color: Option<Color>,
    pub bg_color: Option<Color>,
}

impl CustomTextGridStyle {
    pub fn new(fg_color: Option<Color>, bg_color: Option<Color>) -> Self {
        Self { fg_color, bg_color }
    }
}

impl TextGridStyle for CustomTextGridStyle {
    fn text_color(&self) -> Option<Color> {
        self.fg_color
    }

    fn background_color(&self) -> Option<Color> {
        self.bg_color
    }
}

static STYLE_DEFAULT: LazyLock<Arc<dyn TextGridStyle>> =
    LazyLock::new(|| Arc::new(CustomTextGridStyle::default()));

static STYLE_WHITESPACE: LazyLock<Arc<dyn TextGridStyle>> = LazyLock::new(|| {
    Arc::new(CustomTextGridStyle {
        fg_color: Some(current_theme().color(ColorName::Button)),
        bg_color: None,
    })
});

/// The default cell style: no color overrides.
pub fn text_grid_style_default() -> Arc<dyn TextGridStyle> {
    Arc::clone(&STYLE_DEFAULT)
}

/// The style used for line numbers and whitespace markers.
///
/// Its foreground is the theme's button color, captured the first time the
/// style is used.
pub fn text_grid_style_whitespace() -> Arc<dyn TextGridStyle> {
    Arc::clone(&STYLE_WHITESPACE)
}

/// Resolve a cell style to concrete (foreground, background) colors.
pub(crate) fn resolve_colors(
    style: Option<&dyn TextGridStyle>,
    default_fg: Color,
) -> (Color, Color) {
    let fg = style.and_then(|s| s.text_color()).unwrap_or(default_fg);
    let bg = style
        .and_then(|s| s.background_color())
        .unwrap_or(Color::TRANSPARENT);
    (fg, bg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_colors_fallbacks() {
        let text = Color::rgb(1, 2, 3);
        assert_eq!(resolve_colors(None, text), (text, Color::TRANSPARENT));

        let style = text_grid_style_default();
        assert_eq!(
            resolve_colors(Some(style.as_ref()), text),
            (text, Color::TRANSPARENT)
        );

        let red = Color::rgb(255, 0, 0);
        let bg_only = CustomTextGridStyle::new(None, Some(red));
        assert_eq!(resolve_colors(Some(&bg_only), text), (text, red));

        let both = CustomTextGridStyle::new(Some(red), Some(Color::BLACK));
        assert_eq!(resolve_colors(Some(&both), text), (red, Color::BLACK));
    }

    #[test]
    fn test_singletons_are_shared() {
        assert!(Arc::ptr_eq(
            &text_grid_style_default(),
            &text_grid_style_default()
        ));
        let ws = text_grid_style_whitespace();
        assert!(Arc::ptr_eq(&ws, &text_grid_style_whitespace()));
        assert!(ws.text_color().is_some());
        assert!(ws.background_color().is_none());
    }
}
