// Vertical linear gradient backgrounds.
// Visual: top row is exactly `top`, colors slide toward `bottom` row by row.

use crate::error::{Error, Result};
use crate::types::{Canvas, Color, Size};
use image::Rgba;

/// Interpolated color for row `y` of a `height`-row gradient.
/// r = y / height per channel, truncated; alpha stays opaque.
#[inline]
pub fn row_color(top: Color, bottom: Color, y: u32, height: u32) -> Rgba<u8> {
    let r = y as f64 / height as f64;
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * r) as u8;
    Rgba([lerp(top.r, bottom.r), lerp(top.g, bottom.g), lerp(top.b, bottom.b), 255])
}

/// Build an opaque canvas filled with a top→bottom gradient.
/// One color is computed per row, then the whole row is filled with it.
pub fn vertical_gradient(size: Size, top: Color, bottom: Color) -> Result<Canvas> {
    if size.is_empty() {
        return Err(Error::InvalidGeometry(format!(
            "gradient needs a positive size, got {}x{}",
            size.width, size.height
        )));
    }

    let mut img = Canvas::new(size.width, size.height);
    for (y, row) in img.rows_mut().enumerate() {
        let c = row_color(top, bottom, y as u32, size.height);
        for px in row {
            *px = c;
        }
    }
    Ok(img)
}
