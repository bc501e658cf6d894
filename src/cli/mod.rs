//! Command-line interface for gridkit.
//!
//! This module handles CLI argument parsing. Subcommand implementations live
//! in the [`commands`] submodule.

pub mod commands;

use clap::{Args, Parser, Subcommand};
use gridkit_config::Color;
use gridkit_render::GradientDirection;
use std::path::PathBuf;

/// gridkit - Lay out monospaced text grids and gradients as PNG images
#[derive(Parser)]
#[command(name = "gridkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set debug log level (overrides DEBUG_LEVEL and RUST_LOG)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Gradient direction argument for CLI
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum DirectionArg {
    #[default]
    Horizontal,
    Vertical,
    Circular,
}

impl From<DirectionArg> for GradientDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Horizontal => GradientDirection::Horizontal,
            DirectionArg::Vertical => GradientDirection::Vertical,
            DirectionArg::Circular => GradientDirection::Circular,
        }
    }
}

/// Config, theme and font selection shared by subcommands that lay out text
#[derive(Args, Debug, Clone, Default)]
pub struct AppearanceArgs {
    /// System font family (defaults to the config, then a monospace fallback)
    #[arg(long, value_name = "FAMILY")]
    pub font: Option<String>,

    /// Load the font from a TTF/OTF file instead of the system
    #[arg(long, value_name = "PATH", conflicts_with = "font")]
    pub font_file: Option<PathBuf>,

    /// Font size in points
    #[arg(long, value_name = "POINTS")]
    pub font_size: Option<f32>,

    /// Configuration file (defaults to ~/.config/gridkit/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Theme name (dark, light, dracula, nord)
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Text file to lay out
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output PNG path
    #[arg(short, long, value_name = "PNG")]
    pub output: PathBuf,

    /// Show the line number gutter
    #[arg(long)]
    pub line_numbers: bool,

    /// Show whitespace markers
    #[arg(long)]
    pub whitespace: bool,

    /// Minimum grid width in cells
    #[arg(long, value_name = "N")]
    pub cols: Option<u32>,

    /// Minimum grid height in cells
    #[arg(long, value_name = "N")]
    pub rows: Option<u32>,

    #[command(flatten)]
    pub appearance: AppearanceArgs,
}

#[derive(Args, Debug, Clone)]
pub struct GradientArgs {
    /// Output PNG path
    #[arg(short, long, value_name = "PNG")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = DirectionArg::Horizontal)]
    pub direction: DirectionArg,

    #[arg(long, default_value_t = 256)]
    pub width: u32,

    #[arg(long, default_value_t = 256)]
    pub height: u32,

    /// Start color as RRGGBB or RRGGBBAA
    #[arg(long, value_parser = parse_color, default_value = "000000ff")]
    pub start: Color,

    /// End color as RRGGBB or RRGGBBAA
    #[arg(long, value_parser = parse_color, default_value = "00000000")]
    pub end: Color,

    /// Horizontal offset of the circular centre from the image middle
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub center_x: f32,

    /// Vertical offset of the circular centre from the image middle
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub center_y: f32,
}

#[derive(Args, Debug, Clone)]
pub struct MeasureArgs {
    /// Text to measure; `\t` in the argument is a tab
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub appearance: AppearanceArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lay out a text file in a text grid and save it as PNG
    Render(RenderArgs),

    /// Generate a gradient fill and save it as PNG
    Gradient(GradientArgs),

    /// Print the advance width of a string in pixels
    Measure(MeasureArgs),
}

/// Parse a hex color argument, with or without a leading `#`.
pub fn parse_color(value: &str) -> Result<Color, String> {
    Color::from_hex(value)
        .ok_or_else(|| format!("invalid color '{value}', expected RRGGBB or RRGGBBAA"))
}

/// Run a parsed command line
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Render(args) => commands::render(&args),
        Commands::Gradient(args) => commands::gradient(&args),
        Commands::Measure(args) => commands::measure(&args),
    }
}
