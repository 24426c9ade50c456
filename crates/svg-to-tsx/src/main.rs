//! svg-to-tsx: convert SVG files into React TSX icon components.

mod cli;
mod convert;

use clap::CommandFactory;
use cli::Args;
use convert::ConvertError;
use miette::{miette, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing()?;

    let args = Args::parse_normalized(std::env::args_os());

    match convert::run(&args) {
        Ok(summary) => {
            println!(
                "Successfully converted {} to {}",
                summary.input, summary.output
            );
            Ok(())
        }
        Err(e) => {
            let missing_input = matches!(e, ConvertError::MissingInput);
            eprintln!("{:?}", miette::Report::new(e));
            if missing_input {
                eprintln!("{}", Args::command().render_help());
            }
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| miette!("failed to initialize logging: {}", e))
}
