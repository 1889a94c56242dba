use clap::Parser;
use eyre::{Context, Result};
use log::{info, warn};
use std::fs;
use std::sync::Arc;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use postbox_mcp::config::Config;
use postbox_mcp::protocol::McpServer;
use postbox_mcp::store::MemoryPostStore;
use postbox_mcp::tools::Dispatcher;

fn setup_logging(config: &Config, verbose: bool) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(config.effective_log_level(verbose));

    // RUST_LOG overrides the configured level, but not --verbose
    if !verbose {
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
    }

    // stdout carries the protocol
    match &config.log_file {
        Some(log_file) => {
            if let Some(parent) = log_file.parent() {
                fs::create_dir_all(parent).context("Failed to create log directory")?;
            }
            let target = Box::new(
                fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(log_file)
                    .context("Failed to open log file")?,
            );
            builder.target(env_logger::Target::Pipe(target));
        }
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    builder.try_init().context("Failed to initialize logger")?;

    if let Some(log_file) = &config.log_file {
        info!("Logging initialized, writing to: {}", log_file.display());
    }
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    let store = Arc::new(MemoryPostStore::new());
    let dispatcher = Dispatcher::standard(store).context("Failed to build tool dispatcher")?;
    let server = McpServer::new(dispatcher, config);

    match &cli.command {
        None | Some(Commands::Serve) => server.run_stdio().await.context("Server failed"),
        Some(Commands::Tools) => {
            let json = serde_json::to_string_pretty(&server.responder().list_tools())
                .context("Failed to serialize tool catalog")?;
            println!("{}", json);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let loaded = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let config = loaded.config;

    setup_logging(&config, cli.is_verbose()).context("Failed to setup logging")?;

    // Loading ran before the logger existed
    for warning in &loaded.warnings {
        warn!("{}", warning);
    }
    match &loaded.source {
        Some(path) => info!("Loaded config from: {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
