//! CLI entry point for themeshift.

mod cli;
mod commands;
mod config;
mod output;

use clap::Parser;
use themeshift_observability::ObservabilityConfig;

use crate::cli::Cli;

fn main() {
    config::load_env();
    let cli = Cli::parse();
    output::init(cli.output);

    let mut logging = ObservabilityConfig::from_env();
    if cli.verbose {
        logging = logging.with_log_level("debug");
    }
    if let Err(e) = themeshift_observability::init(logging) {
        output::warning(&e.to_string());
    }

    if let Err(e) = commands::handle(cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
