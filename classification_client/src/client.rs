use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::ClassificationError;
use crate::image::{EncodedImage, JPEG_CONTENT_TYPE, UPLOAD_FILENAME};
use crate::result::ClassificationResult;

/// Client for the remote classification service.
///
/// Performs exactly one network call per `classify` invocation: no
/// retry, no queueing, no caching. The configured timeout bounds the
/// whole round-trip; expiry surfaces as
/// [`ClassificationError::Timeout`].
pub struct ClassificationClient {
    http: Client,
    config: ClientConfig,
}

impl ClassificationClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClassificationError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClassificationError::Connection)?;

        Ok(Self { http, config })
    }

    /// Upload one image and decode the service's verdict.
    ///
    /// The request body is `multipart/form-data` with a single part
    /// named `image`, content type `image/jpeg`, filename
    /// `upload.jpg`.
    pub async fn classify(
        &self,
        image: &EncodedImage,
    ) -> Result<ClassificationResult, ClassificationError> {
        let part = Part::bytes(image.bytes().to_vec())
            .file_name(UPLOAD_FILENAME)
            .mime_str(JPEG_CONTENT_TYPE)
            .map_err(ClassificationError::from)?;
        let form = Form::new().part("image", part);

        let response = self
            .http
            .post(self.config.classify_url())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassificationError::Status { status, body });
        }

        let body = response.text().await?;
        let result = serde_json::from_str(&body)?;

        Ok(result)
    }
}
