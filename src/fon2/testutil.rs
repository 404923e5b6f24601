use crate::fon2::palette::Color;

/// Assembles FON2 buffers for tests. Pixel data is passed already packed.
pub struct FontBuilder {
    first_char: u8,
    last_char: u8,
    height: u16,
    kerning: Option<i16>,
    constant_width: Option<u16>,
    widths: Vec<u16>,
    palette: Vec<Color>,
    pixels: Vec<u8>,
}

impl FontBuilder {
    pub fn new(first_char: u8, last_char: u8, height: u16) -> Self {
        Self{
            first_char, last_char, height,
            kerning: None,
            constant_width: None,
            widths: Vec::new(),
            palette: vec![ [ 0, 0, 0 ] ],
            pixels: Vec::new(),
        }
    }

    pub fn kerning(mut self, kerning: i16) -> Self {
        self.kerning = Some(kerning);
        self
    }

    pub fn constant_width(mut self, width: u16) -> Self {
        self.constant_width = Some(width);
        self
    }

    pub fn widths(mut self, widths: &[u16]) -> Self {
        self.widths = widths.to_vec();
        self
    }

    /// Full palette including both transparent entries.
    pub fn palette(mut self, palette: &[Color]) -> Self {
        self.palette = palette.to_vec();
        self
    }

    pub fn pixels(mut self, pixels: &[u8]) -> Self {
        self.pixels = pixels.to_vec();
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut data = b"FON2".to_vec();
        data.extend(self.height.to_le_bytes());
        data.push(self.first_char);
        data.push(self.last_char);
        data.push(self.constant_width.is_some() as u8);
        data.push(0);
        data.push((self.palette.len() - 1) as u8);
        data.push(self.kerning.is_some() as u8);
        if let Some(kerning) = self.kerning {
            data.extend(kerning.to_le_bytes());
        }
        match self.constant_width {
            Some(width) => data.extend(width.to_le_bytes()),
            None => {
                for width in &self.widths {
                    data.extend(width.to_le_bytes());
                }
            }
        }
        for color in &self.palette {
            data.extend(color);
        }
        data.extend(&self.pixels);
        data
    }
}
