//! Envgen: generate .env files from templates backed by AWS SSM Parameter Store.
//!
//! This is the main entry point for the `envgen` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and maps
//! errors to exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod resolver;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.global.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
