use futures::future::BoxFuture;
use reqwest::Client;

use crate::{config::PredictConfig, domain::Prediction};

use super::{
    protocol::{build_request, parse_response},
    Classifier, ClassifyError,
};

#[derive(Clone)]
pub struct PredictClient {
    http: Client,
    config: PredictConfig,
}

impl PredictClient {
    pub fn new(http: Client, config: PredictConfig) -> Self {
        Self { http, config }
    }

    pub async fn predict(&self, message: &str) -> Result<Prediction, ClassifyError> {
        let response = self
            .http
            .post(self.config.url.clone())
            .timeout(self.config.timeout)
            .json(&build_request(message))
            .send()
            .await?;

        let prediction = parse_response(response).await?;
        tracing::debug!(target: "client", %prediction, "prediction received");
        Ok(prediction)
    }
}

impl Classifier for PredictClient {
    fn classify<'a>(&'a self, message: &'a str) -> BoxFuture<'a, Result<Prediction, ClassifyError>> {
        Box::pin(self.predict(message))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use url::Url;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::{
        domain::Progress,
        pipeline::{classify_batch, summarize},
    };

    fn client_at(url: &str) -> PredictClient {
        let config = PredictConfig {
            url: Url::parse(url).unwrap(),
            timeout: Duration::from_secs(5),
        };
        PredictClient::new(Client::new(), config)
    }

    fn client_for(server: &MockServer) -> PredictClient {
        client_at(&format!("{}/predict", server.uri()))
    }

    async fn answer(server: &MockServer, message: &str, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/predict"))
            .and(body_json(json!({ "message": message })))
            .respond_with(response)
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn posts_message_and_reads_prediction() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .and(body_json(json!({ "message": "Win a free prize!!!" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "prediction": "Spam" })))
            .expect(1)
            .mount(&server)
            .await;

        let prediction = client_for(&server).predict("Win a free prize!!!").await.unwrap();
        assert_eq!(prediction, Prediction::Spam);
    }

    #[tokio::test]
    async fn server_error_body_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "error": "Model not loaded" })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).predict("hello").await.unwrap_err();
        assert!(matches!(err, ClassifyError::Status { .. }));
        assert_eq!(err.service_message(), Some("Model not loaded"));
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).predict("hello").await.unwrap_err();
        assert!(matches!(err, ClassifyError::Malformed(_)));
    }

    #[tokio::test]
    async fn batch_over_http_records_service_failures_per_item() {
        let server = MockServer::start().await;
        answer(
            &server,
            "Win a free prize!!!",
            ResponseTemplate::new(200).set_body_json(json!({ "prediction": "Spam" })),
        )
        .await;
        answer(
            &server,
            "server is down",
            ResponseTemplate::new(500).set_body_json(json!({ "error": "Model not loaded" })),
        )
        .await;
        answer(
            &server,
            "!!!",
            ResponseTemplate::new(200).set_body_json(json!({ "error": "Empty message" })),
        )
        .await;
        answer(
            &server,
            "See you at 5pm",
            ResponseTemplate::new(200).set_body_json(json!({ "prediction": "Not Spam" })),
        )
        .await;

        let messages = vec![
            "Win a free prize!!!".to_string(),
            "server is down".to_string(),
            "!!!".to_string(),
            "See you at 5pm".to_string(),
        ];
        let results = classify_batch(messages, &client_for(&server), &|_: Progress| {}).await;

        let predictions: Vec<Prediction> = results.iter().map(|r| r.prediction).collect();
        assert_eq!(
            predictions,
            vec![
                Prediction::Spam,
                Prediction::Error,
                Prediction::Error,
                Prediction::NotSpam
            ]
        );
        let summary = summarize(&results);
        assert_eq!(summary.spam_count, 1);
        assert_eq!(summary.error_count, 2);
        assert_eq!(summary.spam_count + summary.safe_count, summary.total);
    }

    #[tokio::test]
    async fn unreachable_service_yields_error_results() {
        let client = client_at("http://127.0.0.1:1/predict");
        let messages = vec!["hello".to_string(), "Win cash now".to_string()];

        let results = classify_batch(messages, &client, &|_: Progress| {}).await;

        assert_eq!(results.len(), 2);
        assert!(results
            .iter()
            .all(|r| r.prediction == Prediction::Error && !r.is_spam));
        assert_eq!(results[1].message, "Win cash now");
    }
}
