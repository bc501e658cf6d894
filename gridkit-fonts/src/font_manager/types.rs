//! Font data types and structures for font management.

use std::sync::Arc;

use rustybuzz::ttf_parser;
use swash::FontRef;

/// Stores font data with lifetime management.
///
/// This struct owns the font data bytes and provides a swash `FontRef` for
/// metrics and rasterization plus a parsed OpenType face for table lookups
/// (kerning). Both borrow the owned bytes and are valid for the lifetime of
/// this struct.
#[derive(Clone)]
pub struct FontData {
    /// Raw font data bytes (TTF/OTF/TTC)
    pub data: Arc<Vec<u8>>,
    /// Face index within `data`
    pub face_index: usize,
    /// Swash font reference for glyph operations
    pub font_ref: FontRef<'static>,
    /// Parsed OpenType tables
    pub(crate) tables: ttf_parser::Face<'static>,
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("data_len", &self.data.len())
            .field("face_index", &self.face_index)
            .finish()
    }
}

impl FontData {
    /// Create a new FontData from bytes using face index 0.
    ///
    /// # Returns
    /// `Some(FontData)` if the font data is valid, `None` otherwise.
    pub fn new(data: Vec<u8>) -> Option<Self> {
        Self::new_with_index(data, 0)
    }

    /// Create a new FontData from bytes with a specific face index.
    ///
    /// This is needed for TrueType Collection (.ttc) files where multiple
    /// font faces share the same data but have different face indices.
    ///
    /// # Arguments
    /// * `data` - Raw font data bytes (TTF/OTF/TTC format)
    /// * `face_index` - Face index within the font data (0 for single-face fonts)
    pub fn new_with_index(data: Vec<u8>, face_index: usize) -> Option<Self> {
        let data_arc = Arc::new(data);

        // SAFETY: The bytes live on the heap behind `data_arc`, which is stored
        // in the same struct as every reference derived from them, so neither
        // `font_ref` nor `tables` can outlive the allocation.
        let static_bytes: &'static [u8] =
            unsafe { std::mem::transmute::<&[u8], &'static [u8]>(data_arc.as_slice()) };

        let font_ref = FontRef::from_index(static_bytes, face_index)?;
        let tables = ttf_parser::Face::parse(static_bytes, face_index as u32).ok()?;

        Some(FontData {
            data: data_arc,
            face_index,
            font_ref,
            tables,
        })
    }

    /// Glyph id for `c`, or `None` if the font has no mapping for it.
    pub fn glyph_id(&self, c: char) -> Option<u16> {
        match self.font_ref.charmap().map(c) {
            0 => None,
            id => Some(id),
        }
    }

    /// Kerning between two glyphs in font units, from the `kern` table.
    pub fn kerning_units(&self, left: u16, right: u16) -> i16 {
        let Some(kern) = self.tables.tables().kern.as_ref() else {
            return 0;
        };
        kern.subtables
            .into_iter()
            .filter(|subtable| subtable.horizontal && !subtable.variable)
            .find_map(|subtable| {
                subtable.glyphs_kerning(ttf_parser::GlyphId(left), ttf_parser::GlyphId(right))
            })
            .unwrap_or(0)
    }
}
