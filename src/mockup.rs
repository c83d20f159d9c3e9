// Device mockups: a screenshot shown as a rounded, shadowed card.
// Visual: the app screen floats above the background with soft corners and a
// shadow that falls slightly downward.

use std::path::Path;

use crate::assets;
use crate::blur::gaussian_blur;
use crate::compose::{paste, put_alpha};
use crate::draw::{rounded_rect_mask, stamp_rounded_rect};
use crate::error::{Error, Result};
use crate::types::{Canvas, Color, DeviceClass, Point, Rect, Size};

/// How a mockup card looks. Pad, blur and drop are at reference width; see [`MockupStyle::scaled`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockupStyle {
    pub corner: f32,        // corner radius as a fraction of the box width
    pub shadow_pad: u32,    // transparent margin around the shadow silhouette
    pub shadow_alpha: u8,   // silhouette opacity before blurring
    pub blur_sigma: f32,    // Gaussian std-dev of the shadow
    pub drop: i32,          // how far the shadow falls below the card
}

impl MockupStyle {
    /// Tall phone card: rounder corners, darker tighter shadow.
    pub const PHONE: MockupStyle = MockupStyle {
        corner: 0.10,
        shadow_pad: 40,
        shadow_alpha: 60,
        blur_sigma: 25.0,
        drop: 10,
    };

    /// Wide tablet card: subtle corners, lighter wider shadow.
    pub const TABLET: MockupStyle = MockupStyle {
        corner: 0.04,
        shadow_pad: 50,
        shadow_alpha: 50,
        blur_sigma: 30.0,
        drop: 12,
    };

    pub fn for_device(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Phone => Self::PHONE,
            DeviceClass::Tablet => Self::TABLET,
        }
    }

    /// Corner radius in pixels for a box of `size`, truncated.
    pub fn corner_radius(&self, size: Size) -> u32 {
        (size.width as f32 * self.corner) as u32
    }

    /// Scale the shadow geometry with output resolution (s = width / 1242).
    pub fn scaled(self, s: f32) -> Self {
        Self {
            shadow_pad: (self.shadow_pad as f32 * s) as u32,
            blur_sigma: self.blur_sigma * s,
            drop: (self.drop as f32 * s) as i32,
            ..self
        }
    }
}

/// Screenshot with its corners clipped by a rounded mask (alpha = mask).
pub fn rounded_card(mut shot: Canvas, radius: u32) -> Canvas {
    let size = Size::new(shot.width(), shot.height());
    let mask = rounded_rect_mask(size, radius);
    put_alpha(&mut shot, &mask);
    shot
}

/// Blurred shadow layer: box + `pad` on every side, silhouette in the middle.
pub fn shadow_layer(size: Size, radius: u32, style: &MockupStyle) -> Canvas {
    let pad = style.shadow_pad;
    let mut layer = Canvas::new(size.width + pad * 2, size.height + pad * 2);
    stamp_rounded_rect(
        &mut layer,
        Rect::new(pad as i32, pad as i32, size.width, size.height),
        radius,
        Color::rgba(0, 0, 0, style.shadow_alpha),
    );
    gaussian_blur(&layer, style.blur_sigma)
}

/// Put an already-loaded screenshot on `canvas` as a mockup with its top-left at `at`.
/// The canvas keeps its size; shadow pixels past the edge are clipped.
pub fn place_card(canvas: &mut Canvas, shot: Canvas, at: Point, style: &MockupStyle) -> Result<()> {
    let size = Size::new(shot.width(), shot.height());
    if size.is_empty() {
        return Err(Error::InvalidGeometry("mockup box must be positive".into()));
    }
    let radius = style.corner_radius(size);
    if radius > size.width.min(size.height) / 2 {
        return Err(Error::InvalidGeometry(format!(
            "corner radius {radius} exceeds half of {}x{}",
            size.width, size.height
        )));
    }

    /* 1) Shadow first, nudged down by `drop` so it peeks out under the card. */
    let shadow = shadow_layer(size, radius, style);
    let pad = style.shadow_pad as i32;
    paste(canvas, &shadow, Point::new(at.x - pad, at.y - pad + style.drop));

    /* 2) The clipped screenshot on top at the exact offset. */
    let card = rounded_card(shot, radius);
    paste(canvas, &card, at);
    Ok(())
}

/// Load `screenshot`, fit it to `size`, and composite it at `at`.
pub fn place_mockup(canvas: &mut Canvas, screenshot: &Path, at: Point, size: Size, style: &MockupStyle) -> Result<()> {
    if size.is_empty() {
        return Err(Error::InvalidGeometry(format!(
            "mockup box must be positive, got {}x{}",
            size.width, size.height
        )));
    }
    let shot = assets::load_fitted(screenshot, size)?;
    log::debug!("mockup {} at ({}, {}) {}x{}", screenshot.display(), at.x, at.y, size.width, size.height);
    place_card(canvas, shot, at, style)
}
