// FX: decorative light overlays, software-drawn into transparent layers and then
// composited over the background.
// Visual outcomes:
// - Hero scene: a fan of faint white diagonal streaks in the top-left corner.
// - Pricing scene: a soft blue glow behind the title, brightest in the middle.

use crate::compose::composite;
use crate::draw::draw_line;
use crate::types::{Canvas, Color, Size};
use image::Rgba;

/// Diagonal light streaks, parameterized at reference width.
#[derive(Debug, Clone, Copy)]
pub struct Streaks {
    pub count: u32,        // number of lines in the fan
    pub spacing: i32,      // px between neighbouring lines (scaled by the caller if wanted)
    pub width: u32,        // stroke width
    pub start_alpha: u8,   // alpha of the first line; each next one is 1 lower
}

impl Default for Streaks {
    fn default() -> Self {
        Self { count: 80, spacing: 4, width: 3, start_alpha: 25 }
    }
}

impl Streaks {
    /// Transparent layer holding the fan. Line i runs from (0.2w + i*spacing, 0)
    /// down-left to (0, 0.3h + i*spacing) at alpha max(0, start - i).
    pub fn layer(&self, size: Size) -> Canvas {
        let mut layer = Canvas::new(size.width, size.height);
        let x0 = (size.width as f32 * 0.2) as i32;
        let y1 = (size.height as f32 * 0.3) as i32;
        for i in 0..self.count as i32 {
            let a = (self.start_alpha as i32 - i).max(0) as u8;
            if a == 0 {
                // Fully faded lines leave the layer untouched.
                break;
            }
            let off = i * self.spacing;
            draw_line(&mut layer, x0 + off, 0, 0, y1 + off, self.width, Color::rgba(255, 255, 255, a));
        }
        layer
    }

    pub fn apply(&self, canvas: &mut Canvas) {
        let size = Size::new(canvas.width(), canvas.height());
        composite(canvas, &self.layer(size));
    }
}

/// Radial glow built from concentric filled circles.
/// Circles are drawn from the outside in, each replacing what is beneath it, so a
/// pixel ends up with the alpha of the smallest circle that still contains it.
#[derive(Debug, Clone, Copy)]
pub struct Glow {
    pub cx: i32,
    pub cy: i32,
    pub radius: f32,     // outermost circle
    pub step: usize,     // radius decrement between circles
    pub peak_alpha: f32, // alpha approached at the center
    pub color: Color,
}

impl Glow {
    /// Alpha of the circle with radius `r`: peak * (1 - r / radius), floored at 0.
    #[inline]
    fn ring_alpha(&self, r: i32) -> u8 {
        (self.peak_alpha * (1.0 - r as f32 / self.radius)).max(0.0) as u8
    }

    /// Radius of the innermost circle containing a point at distance `d`, if any.
    /// Circles are r0, r0 - step, r0 - 2*step, ... > 0 with r0 = floor(radius).
    #[inline]
    fn containing_ring(&self, d: f32) -> Option<i32> {
        let r0 = self.radius as i32;
        let step = self.step.max(1) as i32;
        if d > r0 as f32 {
            return None;
        }
        // Largest k with r0 - k*step >= d.
        let k = ((r0 as f32 - d) / step as f32).floor() as i32;
        match r0 - k * step {
            0 => Some(step), // center pixel when r0 is a multiple of step
            r => Some(r),
        }
    }

    pub fn layer(&self, size: Size) -> Canvas {
        let mut layer = Canvas::new(size.width, size.height);
        let r0 = self.radius as i32;
        let (w, h) = (size.width as i32, size.height as i32);
        let rgb = [self.color.r, self.color.g, self.color.b];

        // Scan just the bounding box of the outer circle.
        for y in (self.cy - r0).max(0)..(self.cy + r0 + 1).min(h) {
            for x in (self.cx - r0).max(0)..(self.cx + r0 + 1).min(w) {
                let dx = (x - self.cx) as f32;
                let dy = (y - self.cy) as f32;
                let Some(r) = self.containing_ring((dx * dx + dy * dy).sqrt()) else { continue };
                let a = self.ring_alpha(r);
                layer.put_pixel(x as u32, y as u32, Rgba([rgb[0], rgb[1], rgb[2], a]));
            }
        }
        layer
    }

    pub fn apply(&self, canvas: &mut Canvas) {
        let size = Size::new(canvas.width(), canvas.height());
        composite(canvas, &self.layer(size));
    }
}
