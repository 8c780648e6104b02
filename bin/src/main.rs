//! fracvar CLI - Variation index and fractal dimension of price bar series.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;
mod display;

use display::{Format, InputKind};

#[derive(Parser)]
#[command(name = "fracvar")]
#[command(about = "Variation index and fractal dimension of price bar series", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the fractal dimension of a whole bar file
    Estimate {
        /// Bar file (CSV with high/low columns, JSON or NDJSON)
        input: PathBuf,

        /// Input format. Defaults to the file extension.
        #[arg(short, long, value_enum)]
        input_format: Option<InputKind>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Estimate the fractal dimension over sliding windows
    Rolling {
        /// Bar file (CSV with high/low columns, JSON or NDJSON)
        input: PathBuf,

        /// Window length in bars (at least 32)
        #[arg(short, long, default_value = "128")]
        window: usize,

        /// Bars between consecutive window starts
        #[arg(short, long, default_value = "1")]
        step: usize,

        /// Input format. Defaults to the file extension.
        #[arg(short, long, value_enum)]
        input_format: Option<InputKind>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show the block scales used by the estimator
    Scales,
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Estimate {
            input,
            input_format,
            format,
            output,
            pretty,
        } => {
            commands::estimate::estimate(
                &input,
                input_format.map(Into::into),
                format,
                output.as_deref(),
                pretty,
            )
            .await
        }
        Commands::Rolling {
            input,
            window,
            step,
            input_format,
            format,
            output,
            pretty,
        } => {
            commands::rolling::rolling(
                &input,
                window,
                step,
                input_format.map(Into::into),
                format,
                output.as_deref(),
                pretty,
            )
            .await
        }
        Commands::Scales => commands::scales::show_scales(),
    }
}
