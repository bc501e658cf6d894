//! Default values for font and text-rendering settings.

pub fn font_size() -> f32 {
    14.0
}

pub fn font_family() -> Option<String> {
    None // Resolved to the system monospace family at load time
}
