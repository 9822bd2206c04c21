//! Placeholder name extraction.

use super::{PLACEHOLDER_REGEX, TemplateError};
use std::collections::BTreeSet;

/// Collect the distinct parameter names referenced anywhere in `template`.
///
/// Comment and blank lines are scanned too. Callers should not depend on the
/// iteration order of the returned set.
///
/// Currently never fails; the `Result` leaves room for rejecting malformed
/// placeholders later.
pub fn extract_parameters(template: &str) -> Result<BTreeSet<String>, TemplateError> {
    let names = PLACEHOLDER_REGEX
        .captures_iter(template)
        .filter_map(|captures| captures.get(1))
        .map(|name| name.as_str().to_string())
        .collect();

    Ok(names)
}
