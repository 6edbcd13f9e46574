use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of a single classification call.
///
/// `Connection`, `Timeout` and `Status` are transport-class failures;
/// `Decode` means the service answered but the body did not match the
/// expected schema. Every variant is terminal for that call, the client
/// never retries.
#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("failed to reach classification service: {0}")]
    Connection(#[source] reqwest::Error),
    #[error("classification request timed out: {0}")]
    Timeout(#[source] reqwest::Error),
    #[error("classification service returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("failed to decode classification response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ClassificationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClassificationError::Timeout(err)
        } else {
            ClassificationError::Connection(err)
        }
    }
}

impl ClassificationError {
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClassificationError::Connection(_)
                | ClassificationError::Timeout(_)
                | ClassificationError::Status { .. }
        )
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ClassificationError::Decode(_))
    }

    /// Status code of a non-2xx response, if that is what failed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClassificationError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
