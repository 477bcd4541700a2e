mod batch;
mod error;
mod export;
mod parser;
mod session;
mod summary;

pub use batch::{classify_batch, ProgressObserver};
pub use error::BatchError;
pub use export::{export_file_name, to_csv, write_export};
pub use parser::parse_messages;
pub use session::{BatchSession, BatchState};
pub use summary::summarize;
