use crate::{
    classifier::Classifier,
    domain::{ClassificationResult, Progress},
};

/// Receives `(completed, total)` after each message has been recorded.
pub trait ProgressObserver {
    fn on_progress(&self, progress: Progress);
}

impl<F> ProgressObserver for F
where
    F: Fn(Progress),
{
    fn on_progress(&self, progress: Progress) {
        self(progress)
    }
}

/// Classifies messages one at a time. A failed call becomes an `Error`
/// result and the loop moves on; the output lines up index-for-index with
/// the input.
pub async fn classify_batch<C>(
    messages: Vec<String>,
    classifier: &C,
    progress: &dyn ProgressObserver,
) -> Vec<ClassificationResult>
where
    C: Classifier + ?Sized,
{
    let total = messages.len();
    let mut results = Vec::with_capacity(total);
    tracing::info!(target: "pipeline", total, "classifying batch");

    for (index, message) in messages.into_iter().enumerate() {
        let result = match classifier.classify(&message).await {
            Ok(prediction) => ClassificationResult::classified(message, prediction),
            Err(err) => {
                tracing::warn!(
                    target: "pipeline",
                    error = %err,
                    index,
                    "classification failed; recording error result"
                );
                ClassificationResult::failed(message)
            }
        };
        results.push(result);

        progress.on_progress(Progress {
            completed: index + 1,
            total,
        });
    }

    results
}
