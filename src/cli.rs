use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Classify messages against a spam prediction service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a single message
    Check {
        /// Message text to classify
        message: String,
    },
    /// Classify every message in a .csv or .txt file
    Batch {
        /// File with one message per line
        file: PathBuf,

        /// Write the results to a CSV file in the export directory
        #[arg(long)]
        export: bool,

        /// Directory receiving the exported CSV
        #[arg(long)]
        export_dir: Option<PathBuf>,
    },
}
