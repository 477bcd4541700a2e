mod client;
mod protocol;

use futures::future::BoxFuture;
use thiserror::Error;

use crate::domain::Prediction;

pub use client::PredictClient;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("prediction request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("prediction service returned status {status}")]
    Status {
        status: reqwest::StatusCode,
        detail: Option<String>,
    },
    #[error("prediction service reported an error: {0}")]
    Service(String),
    #[error("malformed prediction response: {0}")]
    Malformed(String),
}

impl ClassifyError {
    /// Message the service itself attached to the failure, if any.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            ClassifyError::Service(message) => Some(message),
            ClassifyError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Something that can label a single message. Implemented by the HTTP
/// client and by stubs in tests.
pub trait Classifier: Send + Sync {
    fn classify<'a>(&'a self, message: &'a str) -> BoxFuture<'a, Result<Prediction, ClassifyError>>;
}
