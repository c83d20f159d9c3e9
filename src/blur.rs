// Gaussian blur for shadow layers.
// Visual: the hard rounded shadow silhouette melts into a soft drop shadow.
//
// `image`'s fast_blur runs three sliding-window box passes per axis over every
// channel, so cost does not depend on sigma and alpha softens with the color.

use crate::types::Canvas;
use image::imageops;

/// Blur every channel (alpha included) of `img` with std-dev `sigma`.
/// Non-positive sigma or an empty layer comes back unchanged.
pub fn gaussian_blur(img: &Canvas, sigma: f32) -> Canvas {
    let (w, h) = img.dimensions();
    if sigma <= 0.0 || w == 0 || h == 0 {
        return img.clone();
    }
    log::debug!("blurring {w}x{h} layer, sigma {sigma}");
    imageops::fast_blur(img, sigma)
}
