// Core geometry + pixel types shared by every drawing step.

use image::{Rgba, RgbaImage};

/// Every output image is drawn into one of these, then flattened to RGB on save.
pub type Canvas = RgbaImage;

/// Reference width the layout constants were authored at (iPhone 6.5" portrait).
pub const REFERENCE_WIDTH: f32 = 1242.0;

/// An 8-bit color with alpha. Opaque colors use a = 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color, different alpha (used for translucent text lines).
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

/// Pixel dimensions. Always positive once validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Layout scale factor `s = width / 1242`.
    /// Visual: every constant is multiplied by this so iPad output keeps iPhone proportions.
    pub fn scale(&self) -> f32 {
        self.width as f32 / REFERENCE_WIDTH
    }
}

/// Top-left placement on a canvas; may be negative (shadows hang off the mockup).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box: origin + size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { origin: Point::new(x, y), size: Size::new(width, height) }
    }

    pub fn right(&self) -> i32 {
        self.origin.x + self.size.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.origin.y + self.size.height as i32
    }
}

/// Which device frame proportions a target uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Phone,
    Tablet,
}

/// Scale a reference-width constant and truncate, like every layout number here.
#[inline]
pub fn px(value: f32, s: f32) -> i32 {
    (value * s) as i32
}

/// Unsigned variant of [`px`] for sizes.
#[inline]
pub fn upx(value: f32, s: f32) -> u32 {
    (value * s).max(0.0) as u32
}
