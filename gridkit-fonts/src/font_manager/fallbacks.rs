//! Monospace family search order.

/// Monospace font families in priority order.
///
/// Searched when no family is configured, or the configured one is missing.
/// The generic monospace family is tried after all of these.
pub const MONOSPACE_FAMILIES: &[&str] = &[
    "DejaVu Sans Mono",
    "JetBrains Mono",
    "Fira Code",
    "Hack",
    "Consolas",
    "Menlo",
    "Monaco",
    "Liberation Mono",
    "Noto Sans Mono",
    "Courier New",
];
