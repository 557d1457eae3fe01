//! CLI entry point for taskboard.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use commands::OutputFormat;
use taskboard_app::{ProjectConfig, SharedTaskService, TaskService};
use taskboard_core::TaskQuery;

mod commands;
mod http;

/// In-memory task board with a JSON API.
#[derive(Parser, Debug)]
#[command(
    name = "taskboard",
    version,
    about = "taskboard: in-memory tasks served over a small JSON API"
)]
struct Cli {
    /// Configuration file (defaults to ./taskboard.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP gateway.
    Serve {
        /// Interface to bind.
        #[arg(long)]
        host: Option<String>,
        /// Port to bind.
        #[arg(long)]
        port: Option<u16>,
        /// Artificial latency for API responses, in milliseconds.
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Start with an empty board instead of the sample tasks.
        #[arg(long)]
        no_seed: bool,
    },

    /// Query the board and print matching tasks.
    Ls {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        sort_by: Option<String>,
        #[arg(long)]
        order: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print board statistics.
    Stats {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the effective configuration.
    Config,
}

fn main() -> Result<()> {
    let Cli { config, cmd } = Cli::parse();

    if should_install_tracing(&cmd) {
        install_tracing();
    }

    let config = ProjectConfig::load(config.as_deref(), ".")?;
    execute_command(config, cmd)
}

fn execute_command(mut config: ProjectConfig, command: Command) -> Result<()> {
    match command {
        Command::Serve {
            host,
            port,
            delay_ms,
            no_seed,
        } => {
            apply_serve_overrides(&mut config, host, port, delay_ms, no_seed)?;
            let service = SharedTaskService::new(TaskService::new(commands::build_store(config.store)));
            tokio::runtime::Runtime::new()?.block_on(http::serve(&config.server, service))
        }

        Command::Ls {
            status,
            priority,
            sort_by,
            order,
            format,
        } => {
            let params = TaskQuery {
                status,
                priority,
                sort_by,
                order,
            };
            let service = TaskService::new(commands::build_store(config.store));
            println!("{}", commands::handle_ls(&service, &params, format)?);
            Ok(())
        }

        Command::Stats { format } => {
            let service = TaskService::new(commands::build_store(config.store));
            println!("{}", commands::handle_stats(&service, format)?);
            Ok(())
        }

        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn apply_serve_overrides(
    config: &mut ProjectConfig,
    host: Option<String>,
    port: Option<u16>,
    delay_ms: Option<u64>,
    no_seed: bool,
) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(delay_ms) = delay_ms {
        config.server.response_delay_ms = delay_ms;
    }
    if no_seed {
        config.store.seed = false;
    }
    config.validate()
}

const fn should_install_tracing(cmd: &Command) -> bool {
    matches!(cmd, Command::Serve { .. })
}

fn install_tracing() {
    // RUST_LOG overrides the filter; INFO otherwise.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}
