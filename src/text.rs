// TrueType text: loading fonts, measuring ink boxes, drawing centered lines.
// Visual: headline/label strings rendered anti-aliased onto the canvas, with any
// non-ASCII characters (ı, ş, ü, ₺ ...) taken from whichever font the caller picked.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::compose::blend_over;
use crate::error::{Error, Result};
use crate::types::{Canvas, Color};
use rusttype::{Font, GlyphId, Scale, point};

/// Fonts are parsed once per run and shared by every image.
#[derive(Default)]
pub struct FontBook {
    fonts: HashMap<PathBuf, Font<'static>>,
}

impl FontBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load (or reuse) the font at `path`. `Font` is a cheap shared handle, so it is returned by value.
    pub fn load(&mut self, path: &Path) -> Result<Font<'static>> {
        if let Some(font) = self.fonts.get(path) {
            return Ok(font.clone());
        }
        if !path.is_file() {
            return Err(Error::AssetNotFound { path: path.to_path_buf() });
        }
        let bytes = std::fs::read(path).map_err(|e| Error::for_unreadable(path, e))?;
        let font = Font::try_from_vec(bytes)
            .ok_or_else(|| Error::for_unreadable(path, "not a TrueType/OpenType font"))?;
        log::debug!("loaded font {}", path.display());
        self.fonts.insert(path.to_path_buf(), font.clone());
        Ok(font)
    }

    /// Shortcut: load + pick a pixel size.
    pub fn sized(&mut self, path: &Path, size: f32) -> Result<SizedFont> {
        Ok(SizedFont::new(self.load(path)?, size))
    }
}

/// A font at a given em size in pixels (the size a designer would type into a text tool).
#[derive(Clone)]
pub struct SizedFont {
    font: Font<'static>,
    scale: Scale,
    ascent: f32,
}

impl SizedFont {
    pub fn new(font: Font<'static>, em_px: f32) -> Self {
        // rusttype scales by ascent-descent height; convert so `em_px` is the em square.
        let vm = font.v_metrics_unscaled();
        let upem = font.units_per_em().max(1) as f32;
        let height_units = (vm.ascent - vm.descent).max(1.0);
        let scale = Scale::uniform(em_px * height_units / upem);
        let ascent = font.v_metrics(scale).ascent;
        Self { font, scale, ascent }
    }
}

/// Ink bounding box of a laid-out string, relative to the draw origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl TextBox {
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }
}

/// Measure where `text` would put ink if drawn at (0,0) with the top of the ascender on y=0.
/// Whitespace-only strings measure as an empty box.
pub fn measure(face: &SizedFont, text: &str) -> TextBox {
    let mut bbox: Option<TextBox> = None;
    for g in face.font.layout(text, face.scale, point(0.0, face.ascent)) {
        if let Some(bb) = g.pixel_bounding_box() {
            let b = bbox.get_or_insert(TextBox { min_x: bb.min.x, min_y: bb.min.y, max_x: bb.max.x, max_y: bb.max.y });
            b.min_x = b.min_x.min(bb.min.x);
            b.min_y = b.min_y.min(bb.min.y);
            b.max_x = b.max_x.max(bb.max.x);
            b.max_y = b.max_y.max(bb.max.y);
        }
    }
    bbox.unwrap_or_default()
}

/// Characters `face` has no glyph for; they would render as the font's placeholder box.
pub fn missing_glyphs(face: &SizedFont, text: &str) -> Vec<char> {
    text.chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .filter(|&c| face.font.glyph(c).id() == GlyphId(0))
        .collect()
}

/// Draw `text` with its ascender line at `y` and pen start at `x`.
/// Visual: glyph coverage mixes `color`'s RGB into the canvas. `color.a` is ignored:
/// solid stems come out in the exact color, since output PNGs carry no alpha.
pub fn draw_text(canvas: &mut Canvas, face: &SizedFont, x: i32, y: i32, text: &str, color: Color) {
    let gaps = missing_glyphs(face, text);
    if !gaps.is_empty() {
        log::warn!("font lacks glyphs {gaps:?} for {text:?}; placeholders will show");
    }

    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    let src = color.with_alpha(255).to_rgba();
    let origin = point(x as f32, y as f32 + face.ascent);
    for g in face.font.layout(text, face.scale, origin) {
        let Some(bb) = g.pixel_bounding_box() else { continue };
        g.draw(|gx, gy, v| {
            let px = bb.min.x + gx as i32;
            let py = bb.min.y + gy as i32;
            if px < 0 || py < 0 || px >= w || py >= h || v <= 0.0 {
                return;
            }
            blend_over(canvas.get_pixel_mut(px as u32, py as u32), src, v);
        });
    }
}

/// Draw one line horizontally centered in the canvas, ascender at `y`. Returns the x used.
/// No wrapping: callers split long copy into lines and call this once per line.
pub fn draw_text_centered(canvas: &mut Canvas, face: &SizedFont, y: i32, text: &str, color: Color) -> i32 {
    let width = measure(face, text).width();
    let x = (canvas.width() as i32 - width).div_euclid(2);
    draw_text(canvas, face, x, y, text, color);
    x
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::Rgba;

    /// First system font we can find; tests needing glyphs skip when there is none.
    pub(crate) fn system_font() -> Option<PathBuf> {
        [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ]
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
    }

    #[test]
    fn missing_font_is_asset_not_found() {
        let mut book = FontBook::new();
        let err = book.load(Path::new("/no/such/Arial Bold.ttf")).unwrap_err();
        assert!(matches!(err, Error::AssetNotFound { .. }));
    }

    #[test]
    fn non_font_file_is_unreadable() {
        let dir = std::env::temp_dir().join(format!("store-previews-text-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("fake.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();
        let err = FontBook::new().load(&path).unwrap_err();
        assert!(matches!(err, Error::UnreadableAsset { .. }));
    }

    #[test]
    fn wider_text_measures_wider() {
        let Some(path) = system_font() else { return };
        let face = FontBook::new().sized(&path, 38.0).unwrap();
        let short = measure(&face, "OEE");
        let long = measure(&face, "OEE & Sigma Level");
        assert!(short.width() > 0);
        assert!(long.width() > short.width());
        assert!(short.max_y > short.min_y && short.min_y >= 0);
        assert_eq!(measure(&face, "   "), TextBox::default());
    }

    #[test]
    fn em_size_scales_measurements() {
        let Some(path) = system_font() else { return };
        let mut book = FontBook::new();
        let small = book.sized(&path, 20.0).unwrap();
        let big = book.sized(&path, 80.0).unwrap();
        let (ws, wb) = (measure(&small, "Quality").width(), measure(&big, "Quality").width());
        assert!(wb > ws * 3 && wb < ws * 5, "{ws} vs {wb}");
    }

    #[test]
    fn centered_text_starts_at_half_the_slack() {
        let Some(path) = system_font() else { return };
        let face = FontBook::new().sized(&path, 40.0).unwrap();
        let mut canvas = Canvas::from_pixel(600, 120, Rgba([0, 0, 0, 255]));
        let x = draw_text_centered(&mut canvas, &face, 20, "Hesaplayıcı", Color::rgb(255, 255, 255));
        let bbox = measure(&face, "Hesaplayıcı");
        assert_eq!(x, (600 - bbox.width()) / 2);

        // All ink lands inside the measured box, shifted by the pen origin.
        let lit: Vec<(i32, i32)> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[0] > 0)
            .map(|(px, py, _)| (px as i32, py as i32))
            .collect();
        assert!(!lit.is_empty());
        for (px, py) in lit {
            assert!(px >= x + bbox.min_x && px < x + bbox.max_x, "x {px}");
            assert!(py >= 20 + bbox.min_y && py < 20 + bbox.max_y, "y {py}");
        }
    }

    #[test]
    fn same_inputs_same_pixels() {
        let Some(path) = system_font() else { return };
        let mut book = FontBook::new();
        let face = book.sized(&path, 30.0).unwrap();
        let render = || {
            let mut c = Canvas::from_pixel(300, 60, Rgba([245, 245, 247, 255]));
            draw_text_centered(&mut c, &face, 10, "Gage R&R", Color::rgb(30, 30, 30));
            c
        };
        assert_eq!(render(), render());
    }

    #[test]
    fn translucent_color_still_inks_full_strength() {
        let Some(path) = system_font() else { return };
        let face = FontBook::new().sized(&path, 40.0).unwrap();
        let mut canvas = Canvas::from_pixel(300, 80, Rgba([0, 122, 255, 255]));
        draw_text(&mut canvas, &face, 10, 10, "Save 44%", Color::rgb(255, 255, 255).with_alpha(220));
        // Stem interiors are the plain text color; the canvas stays opaque.
        assert!(canvas.pixels().any(|p| p.0 == [255, 255, 255, 255]));
        assert!(canvas.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn reports_glyphs_the_font_lacks() {
        let Some(path) = system_font() else { return };
        let face = FontBook::new().sized(&path, 30.0).unwrap();
        assert!(missing_glyphs(&face, "Cp/Cpk & Pp/Ppk").is_empty());
        assert_eq!(missing_glyphs(&face, "A\u{E000}B"), vec!['\u{E000}']);
    }
}
