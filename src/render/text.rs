use crate::fon2::{Font, Glyph, LookupError};
use crate::render::bitmap::Bitmap;

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Upper-case the text before looking up glyphs. Many Doom fonts only
    /// carry capitals.
    pub uppercase: bool,
}

pub struct Composition {
    pub image: Bitmap,
    /// Characters without a glyph, in the order they were encountered.
    pub skipped: Vec<LookupError>,
}

/// Renders `text` as one line, glyphs placed edge to edge from the left.
/// Kerning is not applied.
pub fn render_text(font: &Font, text: &str, options: &RenderOptions) -> Composition {
    let mut glyphs: Vec<&Glyph> = Vec::new();
    let mut skipped = Vec::new();
    for ch in text.chars() {
        let ch = if options.uppercase { ch.to_ascii_uppercase() } else { ch };
        match font.lookup(ch) {
            Ok(glyph) => glyphs.push(glyph),
            Err(e) => {
                log::warn!("{}, skipping", e);
                skipped.push(e);
            }
        }
    }

    let width: u32 = glyphs.iter().fold(0u32, |acc, g| acc.saturating_add(g.width as u32));
    let height: u32 = glyphs.iter().map(|g| g.height as u32).max().unwrap_or(0);
    let mut image = Bitmap::new(width, height);

    let mut base_x: i64 = 0;
    for glyph in &glyphs {
        image.blit(&glyph.bitmap, base_x, glyph.dy as i64);
        base_x += glyph.width as i64;
    }
    log::debug!("rendered {} of {} characters into {}x{}", glyphs.len(), glyphs.len() + skipped.len(), width, height);
    Composition{ image, skipped }
}
