use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    Spam,
    NotSpam,
    Error,
}

impl Prediction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prediction::Spam => "Spam",
            Prediction::NotSpam => "NotSpam",
            Prediction::Error => "Error",
        }
    }

    /// Accepts the labels the prediction service is known to emit; the
    /// reference server spells the negative class "Not Spam".
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != '_' && *ch != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "spam" => Some(Prediction::Spam),
            "notspam" | "ham" => Some(Prediction::NotSpam),
            _ => None,
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub message: String,
    pub prediction: Prediction,
    pub is_spam: bool,
}

impl ClassificationResult {
    pub fn classified(message: String, prediction: Prediction) -> Self {
        Self {
            message,
            is_spam: prediction == Prediction::Spam,
            prediction,
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            message,
            prediction: Prediction::Error,
            is_spam: false,
        }
    }
}

/// Error results are counted as safe; `error_count` is the subset of
/// `safe_count` that never got a prediction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub spam_count: usize,
    pub safe_count: usize,
    pub error_count: usize,
}

impl BatchSummary {
    pub fn spam_percent(&self) -> f64 {
        percent_of(self.spam_count, self.total)
    }

    pub fn safe_percent(&self) -> f64 {
        percent_of(self.safe_count, self.total)
    }
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub results: Vec<ClassificationResult>,
    pub summary: BatchSummary,
}

#[derive(Debug, Serialize)]
pub struct ExportRow<'a> {
    pub message: &'a str,
    pub prediction: &'static str,
}

impl<'a> From<&'a ClassificationResult> for ExportRow<'a> {
    fn from(result: &'a ClassificationResult) -> Self {
        Self {
            message: &result.message,
            prediction: result.prediction.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(&self) -> f64 {
        percent_of(self.completed, self.total)
    }

    pub fn rounded_percent(&self) -> u32 {
        self.percent().round() as u32
    }
}

fn percent_of(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_from_service_are_normalized() {
        assert_eq!(Prediction::from_label("Spam"), Some(Prediction::Spam));
        assert_eq!(Prediction::from_label("Not Spam"), Some(Prediction::NotSpam));
        assert_eq!(Prediction::from_label("NotSpam"), Some(Prediction::NotSpam));
        assert_eq!(Prediction::from_label("maybe"), None);
    }

    #[test]
    fn progress_rounds_like_the_progress_bar() {
        let progress = Progress {
            completed: 1,
            total: 3,
        };
        assert_eq!(progress.rounded_percent(), 33);
        let progress = Progress {
            completed: 2,
            total: 3,
        };
        assert_eq!(progress.rounded_percent(), 67);
    }

    #[test]
    fn percentages_of_empty_summary_are_zero() {
        let summary = BatchSummary::default();
        assert_eq!(summary.spam_percent(), 0.0);
        assert_eq!(summary.safe_percent(), 0.0);
    }
}
