//! Implementation of `envgen generate`.

use super::{Settings, read_template, substitute};
use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::fs::write_secret_file;
use crate::resolver::ParameterResolver;
use std::path::{Path, PathBuf};

/// Execute the `envgen generate` command.
///
/// The template is read before the SSM client is built, and the output is
/// written only after every placeholder has resolved.
pub fn cmd_generate(settings: &Settings, args: GenerateArgs) -> Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&settings.config.output));
    let prefetch = settings.prefetch_paths(args.prefetch);

    let template = read_template(&settings.template)?;

    let client = settings.connect(&prefetch)?;

    render_to_file(&template, &output, &client)?;

    if settings.verbose {
        println!(
            "Successfully generated {} from {}",
            output.display(),
            settings.template.display()
        );
    }

    Ok(())
}

/// Substitute `template` and write the result to `output_path`.
///
/// The output file is left untouched when processing fails.
pub fn render_to_file<R: ParameterResolver + ?Sized>(
    template: &str,
    output_path: &Path,
    resolver: &R,
) -> Result<()> {
    let content = substitute(template, resolver)?;

    write_secret_file(output_path, &content)?;
    tracing::info!(output = %output_path.display(), "generated output file");

    Ok(())
}
