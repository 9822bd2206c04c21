//! Implementation of `envgen list`.

use super::{Settings, read_template};
use crate::cli::ListArgs;
use crate::error::{EnvgenError, Result};
use crate::template::extract_parameters;
use std::collections::BTreeSet;

/// Execute the `envgen list` command.
///
/// Prints one parameter name per line, or a JSON array with `--json`.
/// The parameter store is never contacted.
pub fn cmd_list(settings: &Settings, args: ListArgs) -> Result<()> {
    let template = read_template(&settings.template)?;
    let names = list_parameters(&template)?;

    if args.json {
        let json = serde_json::to_string_pretty(&names).map_err(|e| {
            EnvgenError::UserError(format!("failed to serialize parameter list: {}", e))
        })?;
        println!("{}", json);
    } else {
        for name in &names {
            println!("{}", name);
        }
    }

    tracing::debug!(count = names.len(), "listed template parameters");
    Ok(())
}

/// Distinct parameter names referenced by `template`, comment lines included.
pub fn list_parameters(template: &str) -> Result<BTreeSet<String>> {
    Ok(extract_parameters(template)?)
}
