//! Template formatting with `{N}` placeholders
//!
//! A template is plain text containing placeholders made of a brace, one or
//! more ASCII digits and a closing brace. Arguments fill placeholders in the
//! order the placeholders appear.
//!
//! # Example
//!
//! ```text
//! "test: <1> = {1}, <2> = {2}, <3> = {3}"  +  [1, 2.0, "3"]
//!   -> "test: <1> = 1, <2> = 2.000000, <3> = 3"
//! ```

mod formatter;
mod lexer;
mod value;

pub use formatter::Formatter;
pub use lexer::{lex, placeholders, Placeholder, Span, Token};
pub use value::{Value, DEFAULT_FLOAT_PRECISION};
