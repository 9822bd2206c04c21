//! Template processing for `.env` files.
//!
//! A template is plain text in which `{{SSM:<name>}}` placeholders stand for
//! parameter store values. `<name>` is everything between `{{SSM:` and the
//! nearest `}}`; it is used as-is, without trimming.
//!
//! # Substitution
//!
//! [`Processor::process`] works line by line. Blank lines and lines whose
//! first non-whitespace character is `#` are copied verbatim, even when they
//! contain something that looks like a placeholder. Every placeholder on the
//! other lines is replaced with its resolved value. The first resolution
//! failure aborts the whole run.
//!
//! Lines are split and rejoined on `\n` only, so text without placeholders
//! round-trips byte-for-byte, including a trailing newline and any `\r`.
//!
//! # Extraction
//!
//! [`extract_parameters`] lists the distinct placeholder names in the whole
//! text. Unlike substitution it does not skip comment lines: a placeholder on
//! a commented-out line is listed but never substituted.

mod extract;
mod processor;


pub use extract::extract_parameters;
pub use processor::Processor;

use crate::resolver::ResolveError;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Matches `{{SSM:<name>}}`; capture group 1 is the name.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{SSM:([^}]+)\}\}").expect("Invalid placeholder regex")
});

/// Error type for template processing failures.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// A placeholder's parameter could not be resolved.
    #[error("failed to get SSM parameter {name}: {source}")]
    Resolution {
        name: String,
        #[source]
        source: ResolveError,
    },
}

impl TemplateError {
    /// Name of the parameter that caused the failure.
    pub fn parameter_name(&self) -> &str {
        match self {
            TemplateError::Resolution { name, .. } => name,
        }
    }
}
