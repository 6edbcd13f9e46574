use std::sync::Arc;

use classification_client::{
    ClassificationClient, ClassificationError, ClassificationResult, EncodedImage,
};
use thiserror::Error;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use crate::capture::{CaptureError, FileSource, GalleryDir, ImageSink, ImageSource};
use crate::config::Config;
use crate::encode::EncodeError;
use crate::presentation;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("capture failed: {0}")]
    Capture(#[from] CaptureError),
    #[error("image encoding failed: {0}")]
    Encode(#[from] EncodeError),
    #[error("classification failed: {0}")]
    Classify(#[from] ClassificationError),
}

/// One capture-and-classify pipeline.
///
/// Each user-initiated capture acquires an image, saves it to the sink
/// (failures there are logged and ignored), then submits the encoded
/// bytes on a spawned task. The latest completed call owns the single
/// outcome slot; a newer capture aborts the superseded request so a
/// stale result can never overwrite a fresher one.
pub struct CaptureFlow<S, K> {
    source: S,
    sink: K,
    client: Arc<ClassificationClient>,
    outcome: Arc<Mutex<Option<Result<ClassificationResult, FlowError>>>>,
    in_flight: watch::Sender<bool>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<S: ImageSource, K: ImageSink> CaptureFlow<S, K> {
    pub fn new(source: S, sink: K, client: ClassificationClient) -> Self {
        let (in_flight, _) = watch::channel(false);

        Self {
            source,
            sink,
            client: Arc::new(client),
            outcome: Arc::new(Mutex::new(None)),
            in_flight,
            task: Mutex::new(None),
        }
    }

    /// In-flight signal for the presentation layer, used to disable
    /// repeated submission while a request is pending.
    pub fn in_flight(&self) -> watch::Receiver<bool> {
        self.in_flight.subscribe()
    }

    /// Runs one capture event. Returns `false` when the capture was
    /// cancelled and nothing was submitted.
    pub async fn capture_once(&self) -> Result<bool, FlowError> {
        let image = match self.source.acquire().await? {
            Some(image) => image,
            None => {
                tracing::info!("capture cancelled, nothing to classify");
                return Ok(false);
            }
        };

        if let Err(err) = self.sink.save(&image).await {
            tracing::warn!("gallery save failed: {err}");
        }

        let encoded = image.to_jpeg()?;
        self.submit(encoded).await;

        Ok(true)
    }

    async fn submit(&self, image: EncodedImage) {
        let mut task = self.task.lock().await;
        // A newer capture supersedes any in-flight request.
        if let Some(previous) = task.take() {
            previous.abort();
        }

        let _ = self.in_flight.send(true);

        let client = self.client.clone();
        let outcome = self.outcome.clone();
        let in_flight = self.in_flight.clone();
        *task = Some(tokio::spawn(async move {
            let result = client.classify(&image).await.map_err(FlowError::from);
            *outcome.lock().await = Some(result);
            let _ = in_flight.send(false);
        }));
    }

    /// Resolves once no request is pending.
    pub async fn wait_idle(&self) {
        let mut rx = self.in_flight.subscribe();
        let _ = rx.wait_for(|busy| !*busy).await;
    }

    /// Takes the latest outcome out of the slot. Last write wins; a
    /// superseded request never lands here.
    pub async fn take_outcome(&self) -> Option<Result<ClassificationResult, FlowError>> {
        self.outcome.lock().await.take()
    }

    /// Abandons any in-flight request; its eventual result is dropped.
    pub async fn shutdown(&self) {
        let mut task = self.task.lock().await;
        if let Some(handle) = task.take() {
            handle.abort();
        }
        let _ = self.in_flight.send(false);
    }
}

pub async fn start_app(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let client = ClassificationClient::new(config.classifier.client_config())?;
    let source = FileSource::new(config.capture.image_path.clone());
    let sink = GalleryDir::new(&config.gallery.dir);
    let flow = CaptureFlow::new(source, sink, client);

    match flow.capture_once().await {
        Ok(true) => {}
        Ok(false) => return Ok(()),
        Err(err) => {
            println!("{}", presentation::render_error(&err));
            return Ok(());
        }
    }

    flow.wait_idle().await;

    match flow.take_outcome().await {
        Some(Ok(result)) => {
            tracing::info!("classification completed");
            for line in presentation::render_result(&result) {
                println!("{}", line);
            }
        }
        Some(Err(err)) => println!("{}", presentation::render_error(&err)),
        None => {}
    }

    Ok(())
}
