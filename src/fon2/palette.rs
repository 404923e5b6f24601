use crate::fon2::error::FormatError;

pub type Color = [u8; 3];

/// Rec. 601 luma.
pub fn get_lightness(color: Color) -> f32 {
    color[0] as f32 * 0.299 + color[1] as f32 * 0.587 + color[2] as f32 * 0.114
}

pub struct Palette {
    /// `palette_size + 1` entries; the first and last ones are transparent.
    pub colors: Vec<Color>,
    pub min_lightness: f32,
    pub max_lightness: f32,
    /// Offset of the first byte after the palette.
    pub end_offset: usize,
}

impl Palette {
    pub fn get_color(&self, index: u8) -> Option<Color> {
        self.colors.get(index as usize).copied()
    }
}

pub fn read_palette(data: &[u8], palette_size: u8, offset: usize) -> Result<Palette, FormatError> {
    let num_colors = palette_size as usize + 1;
    let end_offset = offset + num_colors * 3;
    let bytes = data.get(offset..end_offset).ok_or(FormatError::TruncatedPalette)?;

    let colors: Vec<Color> = bytes.chunks_exact(3)
        .map(|rgb| [ rgb[0], rgb[1], rgb[2] ])
        .collect();

    let mut min_lightness = 255.0f32;
    let mut max_lightness = 0.0f32;
    // Entry 0 is transparent, the last one is a dummy
    for color in colors.iter().take(palette_size as usize).skip(1) {
        let lightness = get_lightness(*color);
        min_lightness = min_lightness.min(lightness);
        max_lightness = max_lightness.max(lightness);
    }
    if max_lightness < min_lightness {
        min_lightness = 0.0;
        max_lightness = 255.0;
    }

    Ok(Palette{ colors, min_lightness, max_lightness, end_offset })
}
