// Loads the app screenshots that go inside the device mockups.
// Visual expectation: `load_fitted` hands back an RGBA bitmap exactly the size of
// the mockup box, resampled with Lanczos so UI text in the screenshot stays crisp.

use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{Canvas, Size};
use image::imageops::{self, FilterType};

/// Decode a screenshot from disk into RGBA.
pub fn load_rgba(path: &Path) -> Result<Canvas> {
    if !path.is_file() {
        return Err(Error::AssetNotFound { path: path.to_path_buf() });
    }
    let img = image::open(path).map_err(|e| Error::for_unreadable(path, e))?;
    Ok(img.to_rgba8())
}

/// Decode + resize to `size`. Never nearest-neighbour: screenshots alias badly.
pub fn load_fitted(path: &Path, size: Size) -> Result<Canvas> {
    if size.is_empty() {
        return Err(Error::InvalidGeometry(format!(
            "screenshot box must be positive, got {}x{}",
            size.width, size.height
        )));
    }
    let src = load_rgba(path)?;
    log::debug!(
        "resize {} {}x{} -> {}x{}",
        path.display(),
        src.width(),
        src.height(),
        size.width,
        size.height
    );
    if src.dimensions() == (size.width, size.height) {
        return Ok(src);
    }
    Ok(imageops::resize(&src, size.width, size.height, FilterType::Lanczos3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("store-previews-assets-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn missing_file_is_asset_not_found() {
        let err = load_fitted(Path::new("/no/such/02_home_en.png"), Size::new(10, 10)).unwrap_err();
        assert!(matches!(err, Error::AssetNotFound { .. }));
    }

    #[test]
    fn garbage_file_is_unreadable() {
        let path = scratch("garbage.png");
        std::fs::write(&path, b"not a png").unwrap();
        let err = load_rgba(&path).unwrap_err();
        assert!(matches!(err, Error::UnreadableAsset { .. }));
    }

    #[test]
    fn resizes_to_the_requested_box() {
        let path = scratch("shot.png");
        Canvas::from_pixel(120, 260, Rgba([200, 30, 30, 255])).save(&path).unwrap();
        let img = load_fitted(&path, Size::new(58, 125)).unwrap();
        assert_eq!(img.dimensions(), (58, 125));
        let c = img.get_pixel(29, 60).0;
        assert!((c[0] as i32 - 200).abs() <= 2 && c[3] == 255);
    }

    #[test]
    fn empty_box_is_invalid_geometry() {
        let err = load_fitted(Path::new("whatever.png"), Size::new(0, 10)).unwrap_err();
        assert!(matches!(err, Error::InvalidGeometry(_)));
    }
}
