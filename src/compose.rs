// Alpha compositing: putting one RGBA layer on top of another.
// Visual: shadows, rounded screenshots and glow layers all land on the canvas through here.

use crate::types::{Canvas, Point};
use image::{GrayImage, Rgba, RgbImage};

/// Source-over blend of `src` onto `dst`, with `src` alpha further scaled by `coverage` (0..1).
/// Visual: coverage=1 and alpha=255 replaces the pixel; smaller values let the canvas show through.
#[inline]
pub fn blend_over(dst: &mut Rgba<u8>, src: Rgba<u8>, coverage: f32) {
    let sa = (src.0[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return;
    }
    if sa >= 1.0 {
        *dst = Rgba([src.0[0], src.0[1], src.0[2], 255]);
        return;
    }

    let da = dst.0[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }
    let mix = |s: u8, d: u8| {
        let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        v.round().clamp(0.0, 255.0) as u8
    };
    *dst = Rgba([
        mix(src.0[0], dst.0[0]),
        mix(src.0[1], dst.0[1]),
        mix(src.0[2], dst.0[2]),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ]);
}

/// Paste `layer` at `at` (may be negative), using the layer's own alpha as the paste mask.
/// Parts that fall outside the canvas are clipped; the canvas never grows.
pub fn paste(canvas: &mut Canvas, layer: &Canvas, at: Point) {
    let (cw, ch) = (canvas.width() as i64, canvas.height() as i64);

    // Clip the layer rectangle to the canvas once, then walk only the overlap.
    let x0 = (at.x as i64).max(0);
    let y0 = (at.y as i64).max(0);
    let x1 = (at.x as i64 + layer.width() as i64).min(cw);
    let y1 = (at.y as i64 + layer.height() as i64).min(ch);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for y in y0..y1 {
        let ly = (y - at.y as i64) as u32;
        for x in x0..x1 {
            let lx = (x - at.x as i64) as u32;
            let src = *layer.get_pixel(lx, ly);
            if src.0[3] == 0 {
                continue;
            }
            blend_over(canvas.get_pixel_mut(x as u32, y as u32), src, 1.0);
        }
    }
}

/// Full-size overlay composite (decor layers are always canvas-sized).
pub fn composite(canvas: &mut Canvas, overlay: &Canvas) {
    paste(canvas, overlay, Point::new(0, 0));
}

/// Replace `img`'s alpha channel with `mask` (same size).
/// Visual: where the mask is black the pixel becomes fully transparent.
pub fn put_alpha(img: &mut Canvas, mask: &GrayImage) {
    debug_assert_eq!(img.dimensions(), mask.dimensions());
    for (px, m) in img.pixels_mut().zip(mask.pixels()) {
        px.0[3] = m.0[0];
    }
}

/// Drop alpha for PNG output. Canvases are opaque by construction, so this only discards the channel.
pub fn flatten(canvas: &Canvas) -> RgbImage {
    image::DynamicImage::ImageRgba8(canvas.clone()).to_rgb8()
}
