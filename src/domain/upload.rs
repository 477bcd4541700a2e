use std::path::Path;

use crate::pipeline::BatchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Txt,
}

impl SourceFormat {
    /// Only the text after the last dot counts, compared case-insensitively.
    pub fn from_filename(filename: &str) -> Result<Self, BatchError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "txt" => Ok(SourceFormat::Txt),
            _ => Err(BatchError::UnsupportedFileType {
                filename: filename.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RawUpload {
    pub filename: String,
    pub content: String,
    pub format: SourceFormat,
}

impl RawUpload {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Result<Self, BatchError> {
        let filename = filename.into();
        let format = SourceFormat::from_filename(&filename)?;
        Ok(Self {
            filename,
            content: content.into(),
            format,
        })
    }

    /// The extension is checked before the file is opened.
    pub async fn from_path(path: &Path) -> Result<Self, BatchError> {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let format = SourceFormat::from_filename(&filename)?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| BatchError::Io {
                path: path.display().to_string(),
                source,
            })?;

        Ok(Self {
            filename,
            content: String::from_utf8_lossy(&bytes).into_owned(),
            format,
        })
    }
}
