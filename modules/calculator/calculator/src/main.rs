//! Calculator gRPC server.
//!
//! Configuration layers: defaults -> YAML (`--config`) -> env
//! (`CALCULATOR__*`) -> CLI overrides.

use std::path::PathBuf;

use anyhow::Result;
use calculator::config::ServerConfig;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

/// Calculator Server - add, sub, mul and div over gRPC
#[derive(Parser)]
#[command(name = "calculator-server")]
#[command(about = "Calculator Server - add, sub, mul and div over gRPC")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address override, e.g. 0.0.0.0:8081 (overrides config)
    #[arg(short, long)]
    listen: Option<String>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ServerConfig::load(cli.config.as_deref())?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    config.logging = config.logging.with_verbosity(cli.verbose);

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    calc_bootstrap::init_logging(&config.logging)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &ServerConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!(listen_addr = %config.listen_addr, "Calculator server starting");

    let listener = calc_transport_grpc::server::bind_tcp(&config.listen_addr).await?;

    let cancel = CancellationToken::new();
    calc_bootstrap::cancel_on_shutdown_signal(cancel.clone());

    calculator::module::serve(listener, cancel).await
}
