//! Font discovery: system font database queries and font files.

use std::path::Path;

use fontdb::{Database, Family, Query};

use super::fallbacks::MONOSPACE_FAMILIES;
use super::types::FontData;
use crate::error::FontError;

/// Load a regular-weight face of `family` from the given database.
pub(crate) fn load_font_from_db(font_db: &Database, family: Family<'_>) -> Option<FontData> {
    let query = Query {
        families: &[family],
        weight: fontdb::Weight::NORMAL,
        style: fontdb::Style::Normal,
        ..Query::default()
    };
    let id = font_db.query(&query)?;
    font_db
        .with_face_data(id, |data, index| {
            FontData::new_with_index(data.to_vec(), index as usize)
        })
        .flatten()
}

fn system_database() -> Database {
    let mut font_db = Database::new();
    font_db.load_system_fonts();
    log::info!("Loaded {} system fonts", font_db.len());
    font_db
}

/// Load an installed font family by name.
pub fn load_font_family(family: &str) -> Result<FontData, FontError> {
    let font_db = system_database();
    log::info!("Attempting to load font: {}", family);
    match load_font_from_db(&font_db, Family::Name(family)) {
        Some(font_data) => {
            log::info!("Successfully loaded font: {}", family);
            Ok(font_data)
        }
        None => {
            log::warn!("Font '{}' not found", family);
            Err(FontError::NotFound(family.to_string()))
        }
    }
}

/// Load the first installed monospace family from [`MONOSPACE_FAMILIES`],
/// then the generic monospace family.
pub fn load_monospace_font() -> Result<FontData, FontError> {
    let font_db = system_database();
    for family_name in MONOSPACE_FAMILIES {
        if let Some(font_data) = load_font_from_db(&font_db, Family::Name(family_name)) {
            log::info!("Using monospace font: {}", family_name);
            return Ok(font_data);
        }
        log::debug!("Monospace font '{}' not installed", family_name);
    }
    load_font_from_db(&font_db, Family::Monospace)
        .inspect(|_| log::info!("Using generic monospace font"))
        .ok_or_else(|| FontError::NotFound("monospace".to_string()))
}

/// Load a font file (TTF/OTF, face 0) from disk.
pub fn load_font_file(path: &Path) -> Result<FontData, FontError> {
    let data = std::fs::read(path).map_err(|source| FontError::Io {
        path: path.display().to_string(),
        source,
    })?;
    FontData::new(data).ok_or_else(|| FontError::InvalidData(path.display().to_string()))
}
