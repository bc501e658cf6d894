//! Subcommand implementations for the `gridkit` binary.

use std::path::Path;

use anyhow::{Context, Result};
use gridkit_config::{ColorName, Config, SizeName, Theme, set_current_theme};
use gridkit_fonts::{
    FontFace, load_font_family, load_font_file, load_monospace_font, measure_string,
    points_to_pixels,
};
use gridkit_render::{LinearGradient, Position, Size, SoftwarePainter, save_png};

use super::{AppearanceArgs, GradientArgs, MeasureArgs, RenderArgs};
use crate::widget::TextGrid;

/// Load the config, apply CLI overrides and install the resolved theme.
fn prepare(args: &AppearanceArgs) -> Result<(Config, Theme)> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            log::warn!("Using default config: {:#}", e);
            Config::default()
        }),
    };
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }
    if let Some(size) = args.font_size {
        config.font_size = size;
    }
    if let Some(family) = &args.font {
        config.font_family = Some(family.clone());
    }
    config.validate()?;

    let theme = config.resolve_theme()?;
    set_current_theme(theme.clone());
    Ok((config, theme))
}

/// Open the font named by the CLI or config, at the configured size.
fn open_face(args: &AppearanceArgs, config: &Config) -> Result<FontFace> {
    let font = match (&args.font_file, &config.font_family) {
        (Some(path), _) => load_font_file(path)?,
        (None, Some(family)) => load_font_family(family)?,
        (None, None) => load_monospace_font()?,
    };
    Ok(FontFace::new(font, points_to_pixels(config.font_size, 1.0)))
}

fn read_input(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input from {:?}", path))?;
    // A trailing newline ends the last line rather than starting a new one
    Ok(match text.strip_suffix('\n') {
        Some(stripped) => stripped.strip_suffix('\r').unwrap_or(stripped).to_string(),
        None => text,
    })
}

/// `gridkit render`: lay out a text file and paint it to PNG.
pub fn render(args: &RenderArgs) -> Result<()> {
    let (config, theme) = prepare(&args.appearance)?;
    let face = open_face(&args.appearance, &config)?;
    let text = read_input(&args.input)?;

    let mut grid = TextGrid::from_string(&face, &text);
    grid.set_show_line_numbers(args.line_numbers || config.line_numbers);
    grid.set_show_whitespace(args.whitespace || config.whitespace);

    let cell = grid.cell_size();
    let cols = args.cols.unwrap_or(0) as f32;
    let rows = args.rows.unwrap_or(0) as f32;
    grid.resize(Size::new(cols * cell.width, rows * cell.height));

    let (grid_cols, grid_rows) = grid.grid_size();
    log::info!(
        "Rendering {:?} as a {}x{} grid of {}x{} cells",
        args.input,
        grid_cols,
        grid_rows,
        cell.width,
        cell.height
    );

    let tab_width = theme.size(SizeName::TabWidth) as u32;
    let painter = SoftwarePainter::new(&face, tab_width, theme.color(ColorName::Background));
    let image = painter.paint(grid.objects(), grid.min_size())?;
    save_png(&image, &args.output)?;
    Ok(())
}

/// `gridkit gradient`: generate a gradient fill and save it to PNG.
pub fn gradient(args: &GradientArgs) -> Result<()> {
    if args.width == 0 || args.height == 0 {
        anyhow::bail!(
            "Gradient size must be non-zero, got {}x{}",
            args.width,
            args.height
        );
    }
    let mut gradient = LinearGradient::new(args.start, args.end, args.direction.into());
    gradient.center = Position::new(args.center_x, args.center_y);
    gradient.resize(Size::new(args.width as f32, args.height as f32));

    let image = gradient.generate(args.width, args.height);
    save_png(&image, &args.output)?;
    Ok(())
}

/// `gridkit measure`: print the advance width of a string.
pub fn measure(args: &MeasureArgs) -> Result<()> {
    let (config, theme) = prepare(&args.appearance)?;
    let face = open_face(&args.appearance, &config)?;
    let text = args.text.replace("\\t", "\t");
    let tab_width = theme.size(SizeName::TabWidth) as u32;
    println!("{:.2}", measure_string(&face, &text, tab_width));
    Ok(())
}
