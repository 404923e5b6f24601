use std::collections::HashMap;

use crate::fon2::error::FormatError;
use crate::fon2::header::FontHeader;
use crate::fon2::palette::Palette;
use crate::fon2::rle::RleDecoder;
use crate::fon2::widths::WidthTable;
use crate::render::bitmap::{Bitmap, Rgba};

pub struct Glyph {
    pub code: u8,
    pub width: u16,
    pub height: u16,
    /// Vertical placement relative to the line top; FON2 glyphs always use 0.
    pub dy: i16,
    pub bitmap: Bitmap,
}

impl Glyph {
    pub fn character(&self) -> char {
        char::from(self.code)
    }
}

/// Decodes the packed pixels of every non-empty glyph. Glyphs are stored
/// back to back in ascending character order, so they must be decoded in
/// that order from one decoder.
pub fn rasterize_glyphs(data: &[u8], header: &FontHeader, widths: &WidthTable, palette: &Palette, offset: usize) -> Result<HashMap<char, Glyph>, FormatError> {
    let mut rle = RleDecoder::new(data.get(offset..).unwrap_or(&[]));
    let height = header.character_height;
    let transparent = header.palette_size;

    let mut glyphs = HashMap::new();
    for code in header.first_char..=header.last_char {
        let width = widths.widths[(code - header.first_char) as usize];
        if width == 0 {
            continue;
        }

        // Refuse sizes the rest of the stream could never fill before allocating
        if width as u64 * height as u64 > rle.max_remaining_values() {
            return Err(FormatError::TruncatedPixelData{ code });
        }

        let mut bitmap = Bitmap::new(width as u32, height as u32);
        for n in 0..(width as usize * height as usize) {
            let index = rle.next_value().ok_or(FormatError::TruncatedPixelData{ code })?;
            if index == 0 || index == transparent {
                continue;
            }
            let [ r, g, b ] = palette.get_color(index).ok_or(FormatError::PaletteIndexOutOfRange{
                code, index, palette_size: header.palette_size
            })?;
            bitmap.pixels[n] = Rgba::opaque(r, g, b);
        }
        glyphs.insert(char::from(code), Glyph{ code, width, height, dy: 0, bitmap });
    }
    log::debug!("rasterized {} glyphs, {} bytes of pixel data used", glyphs.len(), rle.offset());
    Ok(glyphs)
}
