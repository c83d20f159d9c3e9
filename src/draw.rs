// Software drawing primitives on an RGBA canvas.
// Visual effects provided here:
// 1) Filled rectangles (brand bar) and rounded rectangles (cards, shadows, clip masks).
// 2) Filled circles (check badges).
// 3) Thick straight lines (light streaks, check mark strokes).
//
// Shape edges are anti-aliased with a 4x4 sub-sample grid, but only on pixels the
// edge actually crosses; interior pixels take the fast path.

use crate::compose::blend_over;
use crate::types::{Canvas, Color, Rect, Size};
use image::{GrayImage, Luma};

const SUB: usize = 4; // 4x4 sub-samples per edge pixel

/* ---------- Pixel access ---------- */

/// Overwrite a pixel if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color, alpha included (used on transparent layers).
#[inline]
fn put_pixel(img: &mut Canvas, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= img.width() || y >= img.height() {
        return;
    }
    img.put_pixel(x, y, color.to_rgba());
}

/// Blend a pixel with partial coverage if (x,y) is inside bounds.
#[inline]
fn blend_pixel(img: &mut Canvas, x: i32, y: i32, color: Color, coverage: f32) {
    if x < 0 || y < 0 || coverage <= 0.0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= img.width() || y >= img.height() {
        return;
    }
    blend_over(img.get_pixel_mut(x, y), color.to_rgba(), coverage);
}

/* ---------- Coverage helpers ---------- */

/// Fraction of pixel (x,y) covered by `inside`, sampled on a 4x4 grid.
fn sampled_coverage(x: i32, y: i32, inside: impl Fn(f32, f32) -> bool) -> f32 {
    let mut hits = 0;
    for sy in 0..SUB {
        for sx in 0..SUB {
            let fx = x as f32 + (sx as f32 + 0.5) / SUB as f32;
            let fy = y as f32 + (sy as f32 + 0.5) / SUB as f32;
            if inside(fx, fy) {
                hits += 1;
            }
        }
    }
    hits as f32 / (SUB * SUB) as f32
}

/// Coverage of pixel (x,y) by a `w`x`h` rounded rectangle at the origin with corner radius `r`.
/// Visual: 1.0 in the body, 0.0 outside, fractional along the four corner arcs.
pub fn rounded_rect_coverage(x: i32, y: i32, w: u32, h: u32, r: u32) -> f32 {
    let (w, h) = (w as i32, h as i32);
    if x < 0 || y < 0 || x >= w || y >= h {
        return 0.0;
    }
    let r = r.min(w.min(h) as u32 / 2) as i32;
    let in_corner_x = x < r || x >= w - r;
    let in_corner_y = y < r || y >= h - r;
    if r == 0 || !(in_corner_x && in_corner_y) {
        return 1.0;
    }

    // Center of the corner circle this pixel belongs to.
    let rf = r as f32;
    let cx = if x < r { rf } else { (w - r) as f32 };
    let cy = if y < r { rf } else { (h - r) as f32 };
    sampled_coverage(x, y, |fx, fy| {
        let dx = fx - cx;
        let dy = fy - cy;
        // Samples past the circle center (towards the body) are always inside.
        let dx = if (x < r && dx > 0.0) || (x >= w - r && dx < 0.0) { 0.0 } else { dx };
        let dy = if (y < r && dy > 0.0) || (y >= h - r && dy < 0.0) { 0.0 } else { dy };
        dx * dx + dy * dy <= rf * rf
    })
}

/* ---------- Shapes ---------- */

/// Solid rectangle, clipped to the canvas.
/// Visual: a flat bar of color (e.g. the thin brand strip on the feature scene).
pub fn fill_rect(img: &mut Canvas, rect: Rect, color: Color) {
    let x0 = rect.origin.x.max(0);
    let y0 = rect.origin.y.max(0);
    let x1 = rect.right().min(img.width() as i32);
    let y1 = rect.bottom().min(img.height() as i32);
    for y in y0..y1 {
        for x in x0..x1 {
            blend_pixel(img, x, y, color, 1.0);
        }
    }
}

/// Rounded rectangle blended onto the canvas.
/// Visual: a card with soft, anti-aliased corners.
pub fn fill_rounded_rect(img: &mut Canvas, rect: Rect, radius: u32, color: Color) {
    let Size { width, height } = rect.size;
    for ly in 0..height as i32 {
        for lx in 0..width as i32 {
            let cov = rounded_rect_coverage(lx, ly, width, height, radius);
            blend_pixel(img, rect.origin.x + lx, rect.origin.y + ly, color, cov);
        }
    }
}

/// Rounded rectangle written straight into a transparent layer (no blending).
/// Visual: used for the shadow silhouette before it gets blurred.
pub fn stamp_rounded_rect(layer: &mut Canvas, rect: Rect, radius: u32, color: Color) {
    let Size { width, height } = rect.size;
    for ly in 0..height as i32 {
        for lx in 0..width as i32 {
            let cov = rounded_rect_coverage(lx, ly, width, height, radius);
            if cov <= 0.0 {
                continue;
            }
            let a = (color.a as f32 * cov).round() as u8;
            put_pixel(layer, rect.origin.x + lx, rect.origin.y + ly, color.with_alpha(a));
        }
    }
}

/// Single-channel mask: black everywhere, white rounded rectangle of full size.
/// Visual: applied as the screenshot's alpha to clip its corners.
pub fn rounded_rect_mask(size: Size, radius: u32) -> GrayImage {
    let mut mask = GrayImage::new(size.width, size.height);
    for (x, y, px) in mask.enumerate_pixels_mut() {
        let cov = rounded_rect_coverage(x as i32, y as i32, size.width, size.height, radius);
        *px = Luma([(cov * 255.0).round() as u8]);
    }
    mask
}

/// Filled circle centered at (cx,cy).
/// Visual: a round badge; edge pixels are partially covered.
pub fn fill_circle(img: &mut Canvas, cx: i32, cy: i32, radius: i32, color: Color) {
    if radius <= 0 {
        return;
    }
    let rf = radius as f32;
    let (ccx, ccy) = (cx as f32, cy as f32);
    for y in (cy - radius - 1)..=(cy + radius) {
        for x in (cx - radius - 1)..=(cx + radius) {
            // Distance from the pixel center decides fast in/out; the rim gets sampled.
            let dx = x as f32 + 0.5 - ccx;
            let dy = y as f32 + 0.5 - ccy;
            let d = (dx * dx + dy * dy).sqrt();
            let cov = if d <= rf - 0.75 {
                1.0
            } else if d >= rf + 0.75 {
                0.0
            } else {
                sampled_coverage(x, y, |fx, fy| {
                    let (ex, ey) = (fx - ccx, fy - ccy);
                    ex * ex + ey * ey <= rf * rf
                })
            };
            blend_pixel(img, x, y, color, cov);
        }
    }
}

/// Thick line between (x0,y0) and (x1,y1): Bresenham walk, stamping a `width`-wide square per step.
/// Pixels are overwritten, not blended, so overlapping stamps never double up the alpha.
/// Visual: a straight stroke of uniform color.
pub fn draw_line(img: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, width: u32, color: Color) {
    let half_lo = (width as i32 - 1) / 2;
    let half_hi = width as i32 / 2;
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        for oy in -half_lo..=half_hi {
            for ox in -half_lo..=half_hi {
                put_pixel(img, x0 + ox, y0 + oy, color);
            }
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Check mark centered in a badge of radius `r`.
/// Visual: a short down-stroke then a long up-stroke, like "✓", without needing the glyph in any font.
pub fn draw_check(img: &mut Canvas, cx: i32, cy: i32, r: i32, color: Color) {
    let rf = r as f32;
    let at = |fx: f32, fy: f32| (cx + (fx * rf) as i32, cy + (fy * rf) as i32);
    let (ax, ay) = at(-0.45, 0.02);
    let (bx, by) = at(-0.12, 0.36);
    let (ex, ey) = at(0.46, -0.32);
    let stroke = ((rf / 5.0).round() as u32).max(2);
    draw_line(img, ax, ay, bx, by, stroke, color);
    draw_line(img, bx, by, ex, ey, stroke, color);
}
