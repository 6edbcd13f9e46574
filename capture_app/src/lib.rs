mod capture;
mod encode;
mod presentation;

pub mod app;
pub mod config;

pub use app::{start_app, CaptureFlow, FlowError};
pub use capture::{CaptureError, FileSource, GalleryDir, ImageSink, ImageSource, SavedImage};
pub use encode::{EncodeError, RasterImage, JPEG_QUALITY};
pub use presentation::{
    notable_predictions, render_error, render_result, SECONDARY_PREDICTION_THRESHOLD,
};
