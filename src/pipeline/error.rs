use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("no messages found in file")]
    EmptyInput,
    #[error("unsupported file type for {filename}: please upload a CSV or TXT file")]
    UnsupportedFileType { filename: String },
    #[error("no file selected")]
    NoFileSelected,
    #[error("failed to access {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize results as CSV")]
    Export(#[from] csv::Error),
}
