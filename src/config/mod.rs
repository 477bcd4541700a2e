pub mod env;
mod loader;

pub use env::{AppConfig, DirectoryConfig, PredictConfig, ReportConfig};
pub use loader::load_config;
