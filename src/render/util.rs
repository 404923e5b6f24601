use std::path::Path;

use anyhow::{anyhow, Context, Result};
use bmp::{Image, Pixel, px};

use crate::render::bitmap::Bitmap;

/// Writes `bitmap` as a 24-bit BMP, flattening transparency onto `background`.
pub fn save_bmp(path: &Path, bitmap: &Bitmap, background: [u8; 3]) -> Result<()> {
    if bitmap.width == 0 || bitmap.height == 0 {
        return Err(anyhow!("refusing to write empty {}x{} image", bitmap.width, bitmap.height));
    }
    let img = to_image(bitmap, background);
    img.save(path).with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}

fn to_image(bitmap: &Bitmap, background: [u8; 3]) -> Image {
    let mut img = Image::new(bitmap.width, bitmap.height);
    for (x, y) in img.coordinates() {
        let [ r, g, b ] = bitmap.pixels[(bitmap.width * y + x) as usize].over(background);
        img.set_pixel(x, y, px!(r, g, b));
    }
    img
}
