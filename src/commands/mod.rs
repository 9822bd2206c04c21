//! Command implementations for envgen.
//!
//! This module resolves the settings shared by every command (config file,
//! template path, region) and routes each CLI command to its handler.
//!
//! Relative paths, whether from flags or from the config file, are resolved
//! against the current working directory.

mod generate;
mod list;
mod validate;


use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{EnvgenError, Result};
use crate::resolver::{ParameterResolver, SsmClient};
use crate::template::Processor;
use std::path::{Path, PathBuf};

/// Settings resolved from flags, the config file, and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: Config,
    pub template: PathBuf,
    pub region: Option<String>,
    pub verbose: bool,
}

impl Settings {
    /// Merge CLI flags over the config discovered in `dir`.
    pub fn resolve(cli: &Cli, dir: &Path) -> Result<Self> {
        let config = Config::discover(cli.global.config.as_deref(), dir)?;

        let template = cli
            .global
            .template
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.template));
        let region = cli.global.region.clone().or_else(|| config.region.clone());

        Ok(Self {
            config,
            template,
            region,
            verbose: cli.global.verbose,
        })
    }

    /// Prefetch paths for this run: the flag's paths, else the config file's.
    pub fn prefetch_paths(&self, from_flags: Vec<String>) -> Vec<String> {
        if from_flags.is_empty() {
            self.config.prefetch.clone()
        } else {
            from_flags
        }
    }

    /// Create the SSM client and warm its cache under `prefetch`.
    fn connect(&self, prefetch: &[String]) -> Result<SsmClient> {
        let client = SsmClient::new(self.region.as_deref())?;
        client.prefetch(prefetch)?;
        Ok(client)
    }
}

/// Run the processor over `template`, logging which parameter failed.
fn substitute<R: ParameterResolver + ?Sized>(template: &str, resolver: &R) -> Result<String> {
    let content = Processor::new(resolver)
        .process(template)
        .inspect_err(|e| {
            tracing::debug!(parameter = e.parameter_name(), "parameter could not be resolved")
        })?;
    Ok(content)
}

/// Dispatch a command to its implementation.
///
/// Running without a subcommand generates the output file.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        EnvgenError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    let settings = Settings::resolve(&cli, &cwd)?;

    match cli.command {
        None => generate::cmd_generate(&settings, cli.generate),
        Some(Command::Generate(args)) => generate::cmd_generate(&settings, args.or(cli.generate)),
        Some(Command::Validate) => validate::cmd_validate(&settings),
        Some(Command::List(args)) => list::cmd_list(&settings, args),
    }
}

/// Read the template file, reporting a missing file distinctly.
pub fn read_template(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(EnvgenError::TemplateNotFound(path.to_path_buf()));
    }

    std::fs::read_to_string(path).map_err(|e| {
        EnvgenError::UserError(format!(
            "failed to read template file '{}': {}",
            path.display(),
            e
        ))
    })
}
