//! mule-app - Mule application installer
//!
//! Installs a packaged Mule application archive, and optionally the domain it
//! belongs to, into the runtime named by `MULE_HOME`.

use clap::Parser;
use miette::Diagnostic;

mod artifact;
mod cli;
mod commands;
mod config;
mod error;
mod hash;
mod installer;
mod logging;
mod package;
mod progress;
mod runtime;

use cli::{Cli, Commands};
use config::Properties;
use logging::Verbosity;

fn main() {
    let cli = Cli::parse();

    let verbosity = Verbosity::from_flags(cli.verbose, cli.quiet);
    logging::init(verbosity);

    let properties: Properties = cli.define.into_iter().collect();

    let result = match cli.command {
        Commands::Install(args) => {
            commands::install::run(args, properties, verbosity == Verbosity::Quiet)
        }
        Commands::Inspect(args) => commands::inspect::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        tracing::debug!(kind = ?e.kind(), "command failed");
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {}", help);
        }
        std::process::exit(1);
    }
}
