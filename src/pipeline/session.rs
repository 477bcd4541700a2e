use parking_lot::Mutex;

use crate::{
    classifier::Classifier,
    domain::{BatchReport, Progress, RawUpload},
};

use super::{classify_batch, parse_messages, summarize, BatchError, ProgressObserver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Idle,
    FileSelected,
    Parsing,
    Classifying { completed: usize, total: usize },
    Summarized,
}

/// One upload at a time; selecting a new file or resetting discards
/// everything from the previous run.
pub struct BatchSession {
    upload: Option<RawUpload>,
    state: Mutex<BatchState>,
}

impl Default for BatchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchSession {
    pub fn new() -> Self {
        Self {
            upload: None,
            state: Mutex::new(BatchState::Idle),
        }
    }

    pub fn state(&self) -> BatchState {
        *self.state.lock()
    }

    pub fn selected(&self) -> Option<&RawUpload> {
        self.upload.as_ref()
    }

    pub fn select(&mut self, upload: RawUpload) {
        tracing::info!(target: "session", filename = %upload.filename, "file selected");
        self.upload = Some(upload);
        self.set_state(BatchState::FileSelected);
    }

    /// Rejected files leave the session exactly as it was.
    pub fn select_named(
        &mut self,
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<(), BatchError> {
        let upload = RawUpload::new(filename, content)?;
        self.select(upload);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.upload = None;
        self.set_state(BatchState::Idle);
    }

    pub async fn run<C>(
        &mut self,
        classifier: &C,
        progress: &dyn ProgressObserver,
    ) -> Result<BatchReport, BatchError>
    where
        C: Classifier + ?Sized,
    {
        let upload = self.upload.as_ref().ok_or(BatchError::NoFileSelected)?;

        self.set_state(BatchState::Parsing);
        let messages = match parse_messages(&upload.content, upload.format) {
            Ok(messages) => messages,
            Err(err) => {
                tracing::warn!(
                    target: "session",
                    filename = %upload.filename,
                    error = %err,
                    "parsing failed"
                );
                self.set_state(BatchState::FileSelected);
                return Err(err);
            }
        };

        let total = messages.len();
        self.set_state(BatchState::Classifying {
            completed: 0,
            total,
        });

        let tracker = StateTracker {
            state: &self.state,
            inner: progress,
        };
        let results = classify_batch(messages, classifier, &tracker).await;
        let summary = summarize(&results);

        self.set_state(BatchState::Summarized);
        tracing::info!(
            target: "session",
            total = summary.total,
            spam = summary.spam_count,
            safe = summary.safe_count,
            errors = summary.error_count,
            "batch summarized"
        );

        Ok(BatchReport { results, summary })
    }

    fn set_state(&self, next: BatchState) {
        let mut state = self.state.lock();
        tracing::debug!(target: "session", from = ?*state, to = ?next, "state change");
        *state = next;
    }
}

struct StateTracker<'a> {
    state: &'a Mutex<BatchState>,
    inner: &'a dyn ProgressObserver,
}

impl ProgressObserver for StateTracker<'_> {
    fn on_progress(&self, progress: Progress) {
        *self.state.lock() = BatchState::Classifying {
            completed: progress.completed,
            total: progress.total,
        };
        self.inner.on_progress(progress);
    }
}
