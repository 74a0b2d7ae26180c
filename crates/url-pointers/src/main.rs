//! url-pointers CLI
//!
//! Validates and exports url-pointers configuration.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use url_pointers::commands::{self, Mode};
use url_pointers::config::Environment;

/// url-pointers administration tool
#[derive(Parser, Debug)]
#[command(name = "url-pointers", author, version)]
#[command(about = "Validate and export url-pointers configuration", long_about = None)]
struct Args {
    /// JSON configuration file; without one, configuration comes from
    /// URL_POINTERS_* variables alone
    #[arg(short, long, env = "URL_POINTERS_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Validate against the standalone schema instead of the server schema
    #[arg(long, global = true)]
    standalone: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the configuration and list the enabled providers
    Check,
    /// Print the validated configuration as URL_POINTERS_* variables
    Export {
        /// Render each variable as a `docker run --env` flag
        #[arg(long)]
        docker_env: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    url_pointers::init_logging("info");

    let mode = if args.standalone {
        Mode::Standalone
    } else {
        Mode::Server
    };
    let env = Environment::from_process();
    let path = args.config.as_deref();
    tracing::debug!(?mode, config = ?path, "running {:?}", args.command);
    let mut stdout = std::io::stdout().lock();

    match args.command {
        Command::Check => commands::cmd_check(mode, path, &env, &mut stdout),
        Command::Export { docker_env } => {
            commands::cmd_export(mode, path, &env, docker_env, &mut stdout)
        }
    }
}
