//! HTTP client for a remote image-classification service.
//!
//! The service accepts a single JPEG image as a multipart upload on
//! `POST {base_url}/classify` and answers with a JSON classification
//! result. This crate owns the wire contract only: request building,
//! response decoding and the transport/decode error taxonomy. It has no
//! camera, filesystem or UI dependency, so it can be exercised against
//! a mock HTTP endpoint.

pub mod client;
pub mod config;
pub mod error;
pub mod image;
pub mod result;

pub use reqwest::StatusCode;

pub use client::ClassificationClient;
pub use config::ClientConfig;
pub use error::ClassificationError;
pub use image::EncodedImage;
pub use result::ClassificationResult;
