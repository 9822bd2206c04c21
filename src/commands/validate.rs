//! Implementation of `envgen validate`.

use super::{Settings, read_template, substitute};
use crate::error::Result;
use crate::resolver::ParameterResolver;

/// Execute the `envgen validate` command.
///
/// Resolves every placeholder exactly as `generate` would, after the same
/// config-driven prefetch, then discards the result. No file is written.
pub fn cmd_validate(settings: &Settings) -> Result<()> {
    let template = read_template(&settings.template)?;
    let client = settings.connect(&settings.prefetch_paths(Vec::new()))?;

    validate_template(&template, &client)?;

    println!("Template {} is valid", settings.template.display());
    Ok(())
}

/// Check that every placeholder in `template` resolves.
pub fn validate_template<R: ParameterResolver + ?Sized>(template: &str, resolver: &R) -> Result<()> {
    substitute(template, resolver)?;
    Ok(())
}
