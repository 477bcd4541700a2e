use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::{
    check::{check_message, Verdict},
    classifier::PredictClient,
    cli::Command,
    config::AppConfig,
    domain::RawUpload,
    infrastructure::{
        directories::{prepare_export_dir, ResolvedPaths},
        shutdown::{Shutdown, ShutdownListener},
    },
    pipeline::{write_export, BatchError, BatchSession},
    report::{render_report, ConsoleProgress},
};

pub struct SpamCheckApp {
    paths: ResolvedPaths,
    client: PredictClient,
    shutdown: Shutdown,
    config: Arc<AppConfig>,
}

impl SpamCheckApp {
    pub fn initialize(config: AppConfig, paths: ResolvedPaths, shutdown: Shutdown) -> Result<Self> {
        let config = Arc::new(config);
        let http_client = Client::builder()
            .user_agent(format!("spam-detector-rust/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        let client = PredictClient::new(http_client, config.predict.clone());

        Ok(Self {
            paths,
            client,
            shutdown,
            config,
        })
    }

    pub async fn run(self, command: Command) -> Result<()> {
        let mut shutdown_listener: ShutdownListener = self.shutdown.subscribe();

        tokio::select! {
            _ = shutdown_listener.notified() => {
                tracing::info!("shutdown signal received (CTRL+C / SIGTERM); stopping");
                Ok(())
            }
            res = self.execute(command) => res,
        }
    }

    async fn execute(&self, command: Command) -> Result<()> {
        match command {
            Command::Check { message } => self.check(&message).await,
            Command::Batch { file, export, .. } => self.batch(&file, export).await,
        }
    }

    async fn check(&self, message: &str) -> Result<()> {
        let verdict = check_message(message, &self.client).await;
        match verdict {
            Verdict::EmptyMessage | Verdict::ServiceError(_) | Verdict::ServerError => {
                eprintln!("{}", verdict.describe());
            }
            Verdict::Spam | Verdict::Safe => println!("{}", verdict.describe()),
        }
        Ok(())
    }

    async fn batch(&self, file: &std::path::Path, export: bool) -> Result<()> {
        let upload = match RawUpload::from_path(file).await {
            Ok(upload) => upload,
            Err(err @ BatchError::UnsupportedFileType { .. }) => {
                eprintln!("Please upload a CSV or TXT file");
                tracing::warn!(target: "session", error = %err, "upload rejected");
                return Ok(());
            }
            Err(err) => return Err(err).context("failed to load batch file"),
        };

        let mut session = BatchSession::new();
        session.select(upload);

        let report = match session.run(&self.client, &ConsoleProgress).await {
            Ok(report) => report,
            Err(BatchError::EmptyInput) => {
                eprintln!("No messages found in file");
                return Ok(());
            }
            Err(err) => return Err(err).context("batch run failed"),
        };

        print!("{}", render_report(&report, self.config.report.preview_chars));

        if export {
            let export_dir = prepare_export_dir(&self.paths.export_dir)?;
            let path = write_export(&report.results, &export_dir)
                .await
                .context("failed to export results")?;
            println!("Results exported to {}", path.display());
        }
        Ok(())
    }
}
