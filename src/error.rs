// One error type for the whole pipeline.
// Every variant states *what* input was wrong so a failed run points at the culprit.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Screenshot or font file does not exist.
    #[error("asset not found: {}", path.display())]
    AssetNotFound { path: PathBuf },

    /// File exists but could not be decoded as an image / font.
    #[error("unreadable asset {}: {reason}", path.display())]
    UnreadableAsset { path: PathBuf, reason: String },

    /// Non-positive box sizes, zero-height gradients, oversize radii.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Locale catalog / target table failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Encoding the finished PNG failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Creating the output directory failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Missing file vs. present-but-broken, decided by looking at the path.
    pub fn for_unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        let path = path.into();
        if path.is_file() {
            Error::UnreadableAsset { path, reason: reason.to_string() }
        } else {
            Error::AssetNotFound { path }
        }
    }
}
