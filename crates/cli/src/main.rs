//! Atlas CLI - startup configuration checker for the Atlas API service.
//!
//! Responsibilities:
//! - Resolve the service configuration exactly the way the service does
//!   at startup (override files, environment, defaults, validation).
//! - Turn loader errors into structured exit codes: this is where the
//!   fail-fast contract on missing secrets and violated invariants is
//!   enforced, so the loader itself stays testable.
//! - Initialize logging from the resolved record (`LOG_LEVEL` as the
//!   filter fallback, `LOG_FORMAT` selecting the formatter) and emit the
//!   redacted startup summary through it.
//! - Print the redacted resolved configuration for operators.
//!
//! Does NOT handle:
//! - Constructing the subsystems that consume the configuration.
//!
//! Invariants:
//! - Secrets and connection strings never reach stdout or the logs.
//! - Log events go to stderr; stdout carries only command output.

mod args;
mod error;

use args::{Cli, Commands};
use atlas_config::{Config, ConfigLoader, LogFormat};
use clap::Parser;
use error::ExitCode;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let mut loader = if cli.no_env_file {
        ConfigLoader::new()
    } else if cli.env_files.is_empty() {
        ConfigLoader::new().load_env_files()
    } else {
        ConfigLoader::new().load_env_files_from(&cli.env_files)
    };

    let config = match loader.load() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("configuration error: {error}");
            std::process::exit(ExitCode::from(&error).as_i32());
        }
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str())),
        )
        .with(summary_layer(config.logging.format, std::io::stderr))
        .init();

    for warning in loader.warnings() {
        tracing::warn!(
            var = warning.var,
            message = %warning.message,
            "invalid optional configuration value"
        );
    }
    config.emit_startup_summary();

    match cli.command {
        Commands::Check => {
            println!(
                "configuration OK ({} warning(s))",
                loader.warnings().len()
            );
        }
        Commands::Show { pretty } => {
            if let Err(error) = print_config(&config, pretty) {
                eprintln!("failed to render configuration: {error}");
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    }
}

/// The formatting layer selected by the resolved `LOG_FORMAT`.
fn summary_layer<S, W>(format: LogFormat, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
        LogFormat::Text => fmt::layer().with_writer(writer).boxed(),
    }
}

fn print_config(config: &Config, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };
    println!("{json}");
    Ok(())
}
