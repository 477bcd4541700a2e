use crate::domain::{BatchSummary, ClassificationResult, Prediction};

pub fn summarize(results: &[ClassificationResult]) -> BatchSummary {
    let total = results.len();
    let spam_count = results.iter().filter(|r| r.is_spam).count();
    let error_count = results
        .iter()
        .filter(|r| r.prediction == Prediction::Error)
        .count();

    BatchSummary {
        total,
        spam_count,
        safe_count: total - spam_count,
        error_count,
    }
}
