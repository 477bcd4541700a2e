pub mod types;
pub mod upload;

pub use types::{BatchReport, BatchSummary, ClassificationResult, ExportRow, Prediction, Progress};
pub use upload::{RawUpload, SourceFormat};
