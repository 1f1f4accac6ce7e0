//! POSIX Utils - small text, template and file helpers
//!
//! The centerpiece is [`format`], which fills `{N}` placeholders in a
//! template with a list of heterogeneous arguments, pairing them by the
//! order the placeholders appear.
//!
//! # Example
//!
//! ```rust
//! use posix_utils::format_template;
//!
//! let out = format_template!("test: <1> = {1}, <2> = {2}, <3> = {3}", 1, 2.0, "3").unwrap();
//! assert_eq!(out, "test: <1> = 1, <2> = 2.000000, <3> = 3");
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod template;
pub mod text;

pub use config::{ConfigError, FormatConfig, ReplaceMode};
pub use error::{FileError, FormatError, PatternError};
pub use template::{placeholders, Formatter, Placeholder, Value};

/// Format a template with the default configuration
///
/// Fails when the number of placeholders differs from the number of arguments.
///
/// # Example
///
/// ```rust
/// use posix_utils::{format, Value};
///
/// let out = format("{1}, {2}!", &[Value::from("Hello"), Value::from("world")]).unwrap();
/// assert_eq!(out, "Hello, world!");
///
/// assert!(format("{1}", &[]).is_err());
/// ```
pub fn format(template: &str, args: &[Value]) -> Result<String, FormatError> {
    Formatter::default().format(template, args)
}

/// Format a template, returning an empty string when the argument count is wrong
///
/// An empty result is ambiguous with a template that legitimately formats to
/// nothing; prefer [`format`] unless byte-for-byte compatibility is needed.
pub fn format_or_empty(template: &str, args: &[Value]) -> String {
    Formatter::default().format_or_empty(template, args)
}

/// Format a template with arguments of mixed types
///
/// Each argument is converted with [`Value::from`].
///
/// ```rust
/// use posix_utils::format_template;
///
/// assert_eq!(format_template!("plain").unwrap(), "plain");
/// assert_eq!(format_template!("{0}/{1}", "a", 7).unwrap(), "a/7");
/// ```
#[macro_export]
macro_rules! format_template {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format($template, &[$($crate::Value::from($arg)),*])
    };
}
