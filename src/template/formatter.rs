//! Positional `{N}` template formatting

use tracing::{debug, trace};

use crate::config::{FormatConfig, ReplaceMode};
use crate::error::FormatError;
use crate::text::replace_all;

use super::lexer::{placeholders, Placeholder};
use super::value::Value;

/// Formats templates with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    /// Create a formatter with the given configuration
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Substitute `args` into the placeholders of `template`.
    ///
    /// Placeholders are paired with arguments in the order they appear in the
    /// template. The digits inside the braces are not used as indices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use posix_utils::{Formatter, Value};
    ///
    /// let out = Formatter::default()
    ///     .format("{1} + {2}", &[Value::from(1), Value::from(2.0)])
    ///     .unwrap();
    /// assert_eq!(out, "1 + 2.000000");
    /// ```
    pub fn format(&self, template: &str, args: &[Value]) -> Result<String, FormatError> {
        let found = placeholders(template);
        if found.len() != args.len() {
            debug!(
                placeholders = found.len(),
                arguments = args.len(),
                "argument count mismatch"
            );
            return Err(FormatError::ArgumentCountMismatch {
                placeholders: found.len(),
                arguments: args.len(),
                spans: found.into_iter().map(|p| p.span).collect(),
            });
        }

        let texts: Vec<String> = args
            .iter()
            .map(|arg| arg.to_text(self.config.float_precision))
            .collect();

        let result = match self.config.replace_mode {
            ReplaceMode::All => substitute_all(template, &found, &texts),
            ReplaceMode::Positional => substitute_positional(template, &found, &texts),
        };
        trace!(template, result = %result, "formatted");
        Ok(result)
    }

    /// Like [`Formatter::format`], returning an empty string on mismatch
    pub fn format_or_empty(&self, template: &str, args: &[Value]) -> String {
        self.format(template, args).unwrap_or_default()
    }
}

fn substitute_all(template: &str, found: &[Placeholder<'_>], texts: &[String]) -> String {
    let mut result = template.to_string();
    for (placeholder, text) in found.iter().zip(texts) {
        result = replace_all(&result, placeholder.text, text);
    }
    result
}

fn substitute_positional(template: &str, found: &[Placeholder<'_>], texts: &[String]) -> String {
    let extra: usize = texts.iter().map(String::len).sum();
    let mut result = String::with_capacity(template.len() + extra);
    let mut cursor = 0;
    for (placeholder, text) in found.iter().zip(texts) {
        result.push_str(&template[cursor..placeholder.span.start]);
        result.push_str(text);
        cursor = placeholder.span.end;
    }
    result.push_str(&template[cursor..]);
    result
}
