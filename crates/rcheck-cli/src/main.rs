//! # rcheck CLI entry point
//!
//! Parses command-line arguments, configures tracing and dispatches to the
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rcheck_cli::check::{run_check, CheckArgs};
use rcheck_cli::config::resolve_options;
use rcheck_cli::demo::{run_demo, DemoArgs};
use rcheck_schema::Validator;

/// rcheck: validate flat records against presence and value constraints.
#[derive(Parser, Debug)]
#[command(name = "rcheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a validator config file (JSON or YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Treat an empty or absent `oneOf` list as always failing.
    #[arg(long, global = true)]
    strict_one_of: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate the built-in contact record against the built-in schema.
    Demo(DemoArgs),

    /// Validate a record file against a schema file.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = resolve_options(cli.config.as_deref(), cli.strict_one_of).and_then(|options| {
        let validator = Validator::new(options);
        match &cli.command {
            Commands::Demo(args) => run_demo(args, &validator),
            Commands::Check(args) => run_check(args, &validator),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
