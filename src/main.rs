//! LongView - Dashboard Configuration Engine
//!
//! Binary entry point: parses the CLI, initializes logging, and dispatches.

use clap::Parser;
use longview::{
    cli::{self, LongViewCli},
    logging::{init_logging, LogConfig},
    Result,
};
use tracing::error;

fn main() -> Result<()> {
    let cli = LongViewCli::parse();

    let log_config = LogConfig::from_env();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = cli::run(cli) {
        error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }

    Ok(())
}
