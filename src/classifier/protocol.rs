use reqwest::Response;
use serde::{Deserialize, Serialize};

use crate::domain::Prediction;

use super::ClassifyError;

#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

pub fn build_request(message: &str) -> PredictRequest<'_> {
    PredictRequest { message }
}

pub async fn parse_response(response: Response) -> Result<Prediction, ClassifyError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let detail = serde_json::from_str::<PredictResponse>(&body)
            .ok()
            .and_then(|parsed| parsed.error);
        return Err(ClassifyError::Status { status, detail });
    }

    let parsed: PredictResponse =
        serde_json::from_str(&body).map_err(|err| ClassifyError::Malformed(err.to_string()))?;
    interpret(parsed)
}

/// An `error` field wins over any prediction sent alongside it.
pub fn interpret(response: PredictResponse) -> Result<Prediction, ClassifyError> {
    if let Some(error) = response.error {
        return Err(ClassifyError::Service(error));
    }
    let label = response
        .prediction
        .ok_or_else(|| ClassifyError::Malformed("response has no prediction".to_string()))?;
    Prediction::from_label(&label)
        .ok_or_else(|| ClassifyError::Malformed(format!("unknown prediction label {label:?}")))
}
