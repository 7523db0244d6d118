mod cli;
mod error;
mod init;
mod logging;
mod probe;
mod progress;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use probe::ProbeArgs;
use std::process;

const EXIT_FAILURE_OUTCOME: i32 = 2;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Probe {
            path,
            method,
            data,
            headers,
            config,
            base_url,
            verbose,
        } => probe::execute(ProbeArgs {
            path,
            method,
            data,
            headers,
            config_path: config,
            base_url,
            verbose,
        })
        .map(|outcome| if outcome.is_failure() { EXIT_FAILURE_OUTCOME } else { 0 }),
        Commands::Init { config, force } => init::execute(config, force).map(|_| 0),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{} {}", "Error:".bold().red(), err.user_message());
            process::exit(1);
        }
    }
}
