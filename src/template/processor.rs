//! Placeholder substitution.

use super::{PLACEHOLDER_REGEX, TemplateError};
use crate::resolver::ParameterResolver;

/// Substitutes placeholders using a [`ParameterResolver`].
///
/// The processor keeps no state between calls; any caching is up to the
/// resolver.
pub struct Processor<'a, R: ParameterResolver + ?Sized> {
    resolver: &'a R,
}

impl<'a, R: ParameterResolver + ?Sized> Processor<'a, R> {
    pub fn new(resolver: &'a R) -> Self {
        Self { resolver }
    }

    /// Replace every placeholder outside blank and comment lines.
    ///
    /// Returns the substituted text, or the first resolution failure in
    /// top-to-bottom, left-to-right order. Nothing is returned on failure.
    pub fn process(&self, template: &str) -> Result<String, TemplateError> {
        let mut lines = Vec::new();

        for line in template.split('\n') {
            if is_passthrough(line) {
                lines.push(line.to_string());
                continue;
            }

            lines.push(self.process_line(line)?);
        }

        Ok(lines.join("\n"))
    }

    fn process_line(&self, line: &str) -> Result<String, TemplateError> {
        let mut result = String::with_capacity(line.len());
        let mut last_end = 0;

        for captures in PLACEHOLDER_REGEX.captures_iter(line) {
            let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            let name = name.as_str();

            result.push_str(&line[last_end..whole.start()]);

            let value = self
                .resolver
                .get_parameter(name)
                .map_err(|source| TemplateError::Resolution {
                    name: name.to_string(),
                    source,
                })?;
            tracing::debug!(parameter = name, "resolved placeholder");

            result.push_str(&value);
            last_end = whole.end();
        }

        result.push_str(&line[last_end..]);
        Ok(result)
    }
}

/// Blank lines and `#` comments are never scanned.
fn is_passthrough(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}
