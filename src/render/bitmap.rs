#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba{ r: 0, g: 0, b: 0, a: 0 };

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self{ r, g, b, a: 255 }
    }

    /// Composites this colour over an opaque background.
    pub fn over(&self, background: [u8; 3]) -> [u8; 3] {
        let a = self.a as u32;
        let mix = |fg: u8, bg: u8| ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8;
        [ mix(self.r, background[0]), mix(self.g, background[1]), mix(self.b, background[2]) ]
    }
}

/// Row-major RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgba>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize).saturating_mul(height as usize);
        let pixels = vec![ Rgba::TRANSPARENT; size ];
        Self{ width, height, pixels }
    }

    fn pixel_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height { return None; }
        Some(self.pixels[self.pixel_index(x, y)])
    }

    pub fn put_pixel(&mut self, x: i64, y: i64, value: Rgba) {
        if x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64 {
            let index = self.pixel_index(x as u32, y as u32);
            self.pixels[index] = value;
        }
    }

    /// Copies the visible pixels of `src` with its top left corner at
    /// (`base_x`, `base_y`). Parts outside this bitmap are clipped.
    pub fn blit(&mut self, src: &Bitmap, base_x: i64, base_y: i64) {
        for y in 0..src.height {
            for x in 0..src.width {
                let value = src.pixels[src.pixel_index(x, y)];
                if value.a == 0 { continue; }
                self.put_pixel(base_x + x as i64, base_y + y as i64, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bitmap_is_transparent() {
        let bitmap = Bitmap::new(3, 2);
        assert_eq!(bitmap.pixels.len(), 6);
        assert!(bitmap.pixels.iter().all(|p| *p == Rgba::TRANSPARENT));
        assert_eq!(bitmap.get_pixel(3, 0), None);
    }

    #[test]
    fn blit_clips_and_keeps_transparency() {
        let red = Rgba::opaque(255, 0, 0);
        let blue = Rgba::opaque(0, 0, 255);
        let mut src = Bitmap::new(2, 2);
        src.pixels = vec![ red, Rgba::TRANSPARENT, red, red ];

        let mut dst = Bitmap::new(3, 2);
        dst.pixels = vec![ blue; 6 ];
        dst.blit(&src, 2, -1);
        assert_eq!(dst.pixels, vec![ blue, blue, red, blue, blue, blue ]);

        dst.blit(&src, 0, 0);
        assert_eq!(dst.get_pixel(0, 0), Some(red));
        assert_eq!(dst.get_pixel(1, 0), Some(blue));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn pixel_index_past_u32_range() {
        // Only the index math is exercised, nothing is allocated
        let bitmap = Bitmap{ width: 70_000, height: 70_000, pixels: Vec::new() };
        assert_eq!(bitmap.pixel_index(5, 69_999), 4_899_930_005);
        assert_eq!(bitmap.pixel_index(69_999, 69_999), 70_000 * 70_000 - 1);
    }

    #[test]
    fn wide_bitmap_addresses_far_columns() {
        let mut bitmap = Bitmap::new(200_000, 2);
        let ink = Rgba::opaque(1, 2, 3);
        bitmap.put_pixel(199_999, 1, ink);
        bitmap.put_pixel(200_000, 1, ink);
        bitmap.put_pixel(i32::MAX as i64 + 1, 0, ink);
        assert_eq!(bitmap.get_pixel(199_999, 1), Some(ink));
        assert_eq!(bitmap.pixels.iter().filter(|p| **p == ink).count(), 1);
        assert_eq!(bitmap.pixels[399_999], ink);
    }

    #[test]
    fn blending() {
        assert_eq!(Rgba::opaque(10, 20, 30).over([ 200, 200, 200 ]), [ 10, 20, 30 ]);
        assert_eq!(Rgba::TRANSPARENT.over([ 1, 2, 3 ]), [ 1, 2, 3 ]);
        assert_eq!(Rgba{ r: 255, g: 0, b: 0, a: 128 }.over([ 0, 0, 0 ]), [ 128, 0, 0 ]);
    }
}
