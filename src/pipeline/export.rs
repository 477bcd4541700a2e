use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::{ClassificationResult, ExportRow};

use super::BatchError;

const HEADER: &str = "Message,Prediction\n";

/// Every field is quoted, so embedded quotes are doubled and line breaks
/// stay inside their field.
pub fn to_csv(results: &[ClassificationResult]) -> Result<String, BatchError> {
    let mut buffer = Vec::from(HEADER.as_bytes());
    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut buffer);

        for result in results {
            writer.serialize(ExportRow::from(result))?;
        }
        writer.flush().map_err(csv::Error::from)?;
    }
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

pub fn export_file_name(at: DateTime<Utc>) -> String {
    format!("spam_detection_results_{}.csv", at.timestamp_millis())
}

pub async fn write_export(
    results: &[ClassificationResult],
    export_dir: &Path,
) -> Result<PathBuf, BatchError> {
    let document = to_csv(results)?;
    let path = export_dir.join(export_file_name(Utc::now()));

    tokio::fs::write(&path, document)
        .await
        .map_err(|source| BatchError::Io {
            path: path.display().to_string(),
            source,
        })?;

    tracing::info!(
        target: "export",
        path = %path.display(),
        rows = results.len(),
        "results exported"
    );
    Ok(path)
}
