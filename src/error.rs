//! Error types for formatting, pattern extraction and file access

use std::path::PathBuf;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::template::Span;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("template has {placeholders} placeholder(s) but {arguments} argument(s) were given")]
    ArgumentCountMismatch {
        placeholders: usize,
        arguments: usize,
        /// Location of every placeholder found in the template
        spans: Vec<Span>,
    },
}

impl FormatError {
    /// Render the error against its template using ariadne
    pub fn report(&self, template: &str, name: &str, color: bool) -> String {
        let mut buf = Vec::new();
        match self {
            FormatError::ArgumentCountMismatch {
                placeholders,
                arguments,
                spans,
            } => {
                let message = self.to_string();
                let mut report = Report::build(ReportKind::Error, name, 0)
                    .with_config(Config::default().with_color(color))
                    .with_message(&message);

                if spans.is_empty() {
                    if template.is_empty() {
                        report = report.with_note("the template is empty");
                    } else {
                        report = report.with_label(
                            Label::new((name, 0..template.chars().count()))
                                .with_message(format!(
                                    "no placeholders here for {} argument(s)",
                                    arguments
                                ))
                                .with_color(Color::Red),
                        );
                    }
                } else {
                    for (i, span) in spans.iter().enumerate() {
                        let note = if i < *arguments {
                            format!("placeholder {} of {}", i + 1, placeholders)
                        } else {
                            format!("placeholder {} of {} has no argument", i + 1, placeholders)
                        };
                        let label_color = if i < *arguments { Color::Blue } else { Color::Red };
                        report = report.with_label(
                            Label::new((name, char_range(template, span)))
                                .with_message(note)
                                .with_color(label_color),
                        );
                    }
                }

                // Writing into a Vec cannot fail
                let _ = report.finish().write((name, Source::from(template)), &mut buf);
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Ariadne labels are positioned by character, spans are bytes
fn char_range(template: &str, span: &Span) -> Span {
    let start = template[..span.start].chars().count();
    let len = template[span.clone()].chars().count();
    start..start + len
}

/// Errors from regex extraction
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("empty pattern")]
    Empty,

    #[error("invalid pattern: {0}")]
    Invalid(#[from] regex::Error),
}

/// Errors from the file helpers
#[derive(Error, Debug)]
pub enum FileError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileError {
    /// Path of the file the operation failed on
    pub fn path(&self) -> &std::path::Path {
        match self {
            FileError::Read { path, .. } | FileError::Write { path, .. } => path,
        }
    }
}
