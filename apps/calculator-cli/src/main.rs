//! Interactive calculator client.
//!
//! Configuration layers: defaults -> YAML (`--config`) -> env
//! (`CALCULATOR_CLI__*`) -> CLI overrides.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use calc_transport_grpc::client::GrpcClientConfig;
use calculator_cli::config::ClientConfig;
use calculator_cli::{run_session, Console};
use calculator_sdk::{CalculatorGrpcClient, CallContext, SERVICE_NAME};
use clap::Parser;
use tokio::io::BufReader;

/// Calculator CLI - interactive client for the calculator service
#[derive(Parser)]
#[command(name = "calculator-cli")]
#[command(about = "Calculator CLI - interactive client for the calculator service")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server address, e.g. localhost:8081 (overrides config)
    #[arg(short, long)]
    addr: Option<String>,

    /// Session budget, e.g. 60m or 1h30m (overrides config)
    #[arg(long, value_parser = humantime::parse_duration)]
    session_timeout: Option<Duration>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ClientConfig::load(cli.config.as_deref())?;
    if let Some(addr) = cli.addr {
        config.addr = addr;
    }
    if let Some(timeout) = cli.session_timeout {
        config.session_timeout = timeout;
    }
    config.logging = config.logging.with_verbosity(cli.verbose);

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    calc_bootstrap::init_logging(&config.logging)?;

    let uri = config.endpoint_uri();
    let grpc_cfg =
        GrpcClientConfig::new(SERVICE_NAME).with_connect_timeout(config.connect_timeout);
    let client = CalculatorGrpcClient::connect_lazy(uri.clone(), &grpc_cfg)
        .with_context(|| format!("invalid server address: {uri}"))?;

    let ctx = CallContext::with_timeout(config.session_timeout);
    tracing::info!(
        %uri,
        session_timeout = %humantime::format_duration(config.session_timeout),
        "Calculator session started"
    );

    let mut console = Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    let end = run_session(&client, &ctx, &mut console).await?;

    tracing::info!(?end, "Calculator session finished");
    Ok(())
}
