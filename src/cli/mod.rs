//! CLI argument parsing for envgen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Envgen: generate .env files from templates backed by AWS SSM Parameter Store.
///
/// Placeholders of the form `{{SSM:/path/to/param}}` are replaced with the
/// parameter's decrypted value. Blank lines and `#` comments are copied as-is.
/// Running without a subcommand is the same as `envgen generate`.
#[derive(Parser, Debug)]
#[command(name = "envgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Generate options, accepted without the `generate` subcommand.
    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every command.
#[derive(Args, Debug, Default, Clone)]
pub struct GlobalArgs {
    /// Path to the template file [default: .env.template].
    #[arg(short, long, global = true)]
    pub template: Option<PathBuf>,

    /// AWS region (overrides the AWS_REGION environment variable).
    #[arg(short, long, global = true)]
    pub region: Option<String>,

    /// Path to a config file [default: .envgen.yaml when present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands for envgen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the output file from the template.
    ///
    /// Resolves every placeholder and writes the result atomically.
    /// Nothing is written if any parameter fails to resolve.
    Generate(GenerateArgs),

    /// Check that every placeholder in the template resolves.
    ///
    /// Performs the same lookups as `generate`, including any configured
    /// prefetch, but discards the output.
    Validate,

    /// List the parameter names referenced by the template.
    ///
    /// Does not contact the parameter store. Placeholders on comment
    /// lines are listed too.
    List(ListArgs),
}

/// Arguments for the `generate` command.
#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Path to the output file [default: .env].
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Parameter path prefixes to fetch in bulk before processing.
    #[arg(long, value_delimiter = ',', value_parser = parse_prefetch_path)]
    pub prefetch: Vec<String>,
}

/// Arguments for the `list` command.
#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Print the names as a JSON array.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Apply the config file's prefetch path rule to `--prefetch` values.
fn parse_prefetch_path(path: &str) -> Result<String, String> {
    crate::config::validate_prefetch_path(path).map(|()| path.to_string())
}

impl GenerateArgs {
    /// Fill unset options from `fallback` (the top-level flags).
    pub fn or(self, fallback: GenerateArgs) -> GenerateArgs {
        GenerateArgs {
            output: self.output.or(fallback.output),
            prefetch: if self.prefetch.is_empty() {
                fallback.prefetch
            } else {
                self.prefetch
            },
        }
    }
}
