use crate::fon2::Font;
use crate::render::bitmap::Bitmap;

/// Lays out every glyph of `font` in character order, wrapping to a new
/// row of cells once `sheet_width` would be exceeded.
pub fn render_sheet(font: &Font, sheet_width: u32) -> Bitmap {
    let cell_height = font.get_height() as u32;

    let mut positions = Vec::new();
    let mut base_x: u32 = 0;
    let mut base_y: u32 = 0;
    let mut used_width: u32 = 0;
    for glyph in font.glyphs() {
        let char_width = glyph.width as u32;
        if base_x > 0 && base_x + char_width > sheet_width {
            base_x = 0;
            base_y += cell_height;
        }
        positions.push((glyph, base_x, base_y));
        base_x += char_width;
        used_width = used_width.max(base_x);
    }

    let height = if positions.is_empty() { 0 } else { base_y + cell_height };
    let mut sheet = Bitmap::new(used_width, height);
    for (glyph, x, y) in positions {
        sheet.blit(&glyph.bitmap, x as i64, y as i64 + glyph.dy as i64);
    }
    sheet
}
