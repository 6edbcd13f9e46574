/// Content type of every upload this client performs.
pub const JPEG_CONTENT_TYPE: &str = "image/jpeg";

/// Filename reported in the multipart part, fixed by the service
/// contract.
pub const UPLOAD_FILENAME: &str = "upload.jpg";

/// A compressed image ready for upload.
///
/// Produced by the capture side, consumed by the client. Ephemeral: one
/// instance lives for exactly one classification call.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    bytes: Vec<u8>,
}

impl EncodedImage {
    pub fn from_jpeg_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
