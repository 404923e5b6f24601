//! Decoder for ZDoom FON2 bitmap fonts.
//!
//! Layout: 12-byte header, optional kerning value, width table, palette,
//! then RLE packed palette indices for all glyphs in ascending order.

pub mod error;
pub mod glyph;
pub mod header;
pub mod palette;
pub mod rle;
pub mod widths;

#[cfg(test)]
pub(crate) mod testutil;

use std::collections::HashMap;

pub use error::{FormatError, LookupError};
pub use glyph::Glyph;
pub use header::FontHeader;
pub use palette::Palette;
pub use widths::WidthTable;

pub struct Font {
    header: FontHeader,
    widths: WidthTable,
    palette: Palette,
    glyphs: HashMap<char, Glyph>,
}

impl Font {
    pub fn new(data: &[u8]) -> Result<Self, FormatError> {
        let header = header::parse_header(data)?;
        log::debug!("FON2 header: height {} chars {}..={} constant_width {} palette_size {} kerning {}",
            header.character_height, header.first_char, header.last_char,
            header.constant_width, header.palette_size, header.has_kerning_info);

        let width_table = widths::read_widths(data, &header)?;
        let palette = palette::read_palette(data, header.palette_size, width_table.end_offset)?;
        log::debug!("palette at {}, pixel data at {}", width_table.end_offset, palette.end_offset);

        let glyphs = glyph::rasterize_glyphs(data, &header, &width_table, &palette, palette.end_offset)?;
        Ok(Self{ header, widths: width_table, palette, glyphs })
    }

    pub fn get_header(&self) -> &FontHeader {
        &self.header
    }

    pub fn get_height(&self) -> u16 {
        self.header.character_height
    }

    pub fn kerning(&self) -> Option<i16> {
        self.widths.kerning
    }

    pub fn lightness_range(&self) -> (f32, f32) {
        (self.palette.min_lightness, self.palette.max_lightness)
    }

    pub fn get_palette(&self) -> &Palette {
        &self.palette
    }

    /// Width table entry for a character code, including zero widths.
    pub fn get_char_width(&self, code: u8) -> Option<u16> {
        self.widths.get_width(&self.header, code)
    }

    pub fn get_glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn lookup(&self, ch: char) -> Result<&Glyph, LookupError> {
        self.get_glyph(ch).ok_or(LookupError{ character: ch })
    }

    pub fn get_number_of_glyphs(&self) -> usize {
        self.glyphs.len()
    }

    /// Glyphs in ascending character order.
    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> + '_ {
        (self.header.first_char..=self.header.last_char)
            .filter_map(move |code| self.glyphs.get(&char::from(code)))
    }
}
