use crate::{
    classifier::Classifier,
    domain::Prediction,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    EmptyMessage,
    Spam,
    Safe,
    ServiceError(String),
    ServerError,
}

impl Verdict {
    pub fn describe(&self) -> String {
        match self {
            Verdict::EmptyMessage => "Please enter a message".to_string(),
            Verdict::Spam => "This message is SPAM".to_string(),
            Verdict::Safe => "This message is SAFE".to_string(),
            Verdict::ServiceError(message) => format!("Error: {message}"),
            Verdict::ServerError => "Server error occurred".to_string(),
        }
    }
}

pub async fn check_message<C>(text: &str, classifier: &C) -> Verdict
where
    C: Classifier + ?Sized,
{
    let message = text.trim();
    if message.is_empty() {
        return Verdict::EmptyMessage;
    }

    match classifier.classify(message).await {
        Ok(Prediction::Spam) => Verdict::Spam,
        Ok(Prediction::NotSpam) => Verdict::Safe,
        Ok(Prediction::Error) => Verdict::ServerError,
        Err(err) => {
            tracing::warn!(target: "client", error = %err, "single message check failed");
            match err.service_message() {
                Some(message) => Verdict::ServiceError(message.to_string()),
                None => Verdict::ServerError,
            }
        }
    }
}
