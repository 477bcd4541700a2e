use anyhow::Result;
use clap::Parser;
use spam_detector_rust::{
    app, cli, config,
    infrastructure::{directories, logging, shutdown},
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = cli::Cli::parse();
    let mut config = config::load_config()?;
    if let cli::Command::Batch {
        export_dir: Some(dir),
        ..
    } = &cli.command
    {
        config.directories.export_dir = dir.display().to_string();
    }

    let paths = directories::ensure_directories(&config.directories)?;
    logging::init_tracing(&config, &paths)?;
    tracing::info!(
        target: "config",
        predict_url = %config.predict.url,
        export_dir = %paths.export_dir.display(),
        "configuration loaded"
    );

    let shutdown = shutdown::Shutdown::new();
    shutdown::install_signal_handlers(shutdown.clone());

    let app = app::SpamCheckApp::initialize(config, paths, shutdown)?;
    app.run(cli.command).await
}
