mod config;
mod logging;
mod server;
mod signals;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::AppConfig;
use std::path::PathBuf;

/// CRUD Server - employee wellness, library and student record registries
#[derive(Parser)]
#[command(name = "crud-server")]
#[command(about = "CRUD Server - employee wellness, library and student record registries")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use mock database (sqlite::memory:) for all modules
    #[arg(long)]
    mock: bool,

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

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (CRUD__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port, cli.verbose, cli.mock);

    logging::init_logging(&config.logging);
    tracing::info!("CRUD Server starting");

    // Print config and exit if requested
    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    // Dispatch subcommands (default: run)
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => server::run(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    let modules = &config.modules;
    for (name, base_path) in [
        ("employee_wellness", &modules.employee_wellness.base_path),
        ("library", &modules.library.base_path),
        ("student_records", &modules.student_records.base_path),
    ] {
        crudkit::api::normalize_base_path(base_path)
            .map_err(|e| anyhow::anyhow!("module {name}: {e}"))?;
    }
    config
        .server
        .bind_addr
        .parse::<std::net::SocketAddr>()
        .map_err(|e| anyhow::anyhow!("server.bind_addr '{}': {e}", config.server.bind_addr))?;

    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}
