use classification_client::EncodedImage;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use thiserror::Error;

/// Fixed compression quality for uploads, matching what the service
/// was tuned against.
pub const JPEG_QUALITY: u8 = 90;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("failed to decode captured image: {0}")]
    DecodeFailed(image::ImageError),
    #[error("failed to encode image as jpeg: {0}")]
    EncodeFailed(image::ImageError),
}

/// An uncompressed raster held in memory between capture and upload.
#[derive(Debug, Clone)]
pub struct RasterImage {
    inner: DynamicImage,
}

impl RasterImage {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EncodeError> {
        let inner = image::load_from_memory(bytes).map_err(EncodeError::DecodeFailed)?;
        Ok(Self { inner })
    }

    pub fn from_dynamic(inner: DynamicImage) -> Self {
        Self { inner }
    }

    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Compress to quality-90 JPEG bytes ready for upload.
    pub fn to_jpeg(&self) -> Result<EncodedImage, EncodeError> {
        let mut buf = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
        self.inner
            .write_with_encoder(encoder)
            .map_err(EncodeError::EncodeFailed)?;

        Ok(EncodedImage::from_jpeg_bytes(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn to_jpeg_produces_jpeg_bytes() {
        let raster = RasterImage::from_dynamic(DynamicImage::ImageRgb8(RgbImage::new(8, 8)));

        let encoded = raster.to_jpeg().unwrap();

        assert!(!encoded.is_empty());
        // JPEG start-of-image marker
        assert_eq!(&encoded.bytes()[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn round_trips_through_decode() {
        let raster = RasterImage::from_dynamic(DynamicImage::ImageRgb8(RgbImage::new(6, 4)));
        let encoded = raster.to_jpeg().unwrap();

        let reloaded = RasterImage::from_bytes(encoded.bytes()).unwrap();

        assert_eq!(reloaded.width(), 6);
        assert_eq!(reloaded.height(), 4);
    }

    #[test]
    fn rejects_garbage_bytes() {
        assert!(RasterImage::from_bytes(b"not an image").is_err());
    }
}
