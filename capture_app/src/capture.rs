use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use crate::encode::{EncodeError, RasterImage};

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("failed to read image at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write image to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("captured image is not a valid raster: {0}")]
    InvalidImage(#[from] EncodeError),
}

/// Supplies one raster image per user-initiated capture. `None` means
/// the capture was cancelled and nothing should be classified.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn acquire(&self) -> Result<Option<RasterImage>, CaptureError>;
}

/// Persists a captured image. Failures here are reported to the caller
/// but never block classification.
#[async_trait]
pub trait ImageSink: Send + Sync {
    async fn save(&self, image: &RasterImage) -> Result<Option<SavedImage>, CaptureError>;
}

#[derive(Debug, Clone)]
pub struct SavedImage {
    pub path: PathBuf,
}

/// File-backed stand-in for the platform camera: reads a configured
/// image path, treating an unset or missing path as a cancelled
/// capture.
pub struct FileSource {
    path: Option<PathBuf>,
}

impl FileSource {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ImageSource for FileSource {
    async fn acquire(&self) -> Result<Option<RasterImage>, CaptureError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(CaptureError::ReadFailed {
                    path: path.clone(),
                    source,
                })
            }
        };

        Ok(Some(RasterImage::from_bytes(&bytes)?))
    }
}

/// Gallery directory sink: writes each capture as a timestamped JPEG.
pub struct GalleryDir {
    dir: PathBuf,
}

impl GalleryDir {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ImageSink for GalleryDir {
    async fn save(&self, image: &RasterImage) -> Result<Option<SavedImage>, CaptureError> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let path = self.dir.join(format!("captured_{}.jpg", timestamp));

        let encoded = image.to_jpeg()?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| CaptureError::WriteFailed {
                path: self.dir.clone(),
                source,
            })?;
        tokio::fs::write(&path, encoded.into_bytes())
            .await
            .map_err(|source| CaptureError::WriteFailed {
                path: path.clone(),
                source,
            })?;

        tracing::debug!("saved capture to {}", path.display());

        Ok(Some(SavedImage { path }))
    }
}
