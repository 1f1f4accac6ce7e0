//! POSIX Utils CLI
//!
//! Usage:
//!   posix-utils [OPTIONS] <COMMAND>
//!
//! Commands:
//!   format   Fill `{N}` placeholders in a template
//!   split    Split text on a separator
//!   replace  Replace every occurrence of a substring
//!   extract  Print every match of a regex

use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use posix_utils::{
    fs, text, ConfigError, FileError, FormatConfig, Formatter, PatternError, ReplaceMode, Value,
};

#[derive(Parser)]
#[command(name = "posix-utils")]
#[command(about = "Template formatting, text and file helpers")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fill `{N}` placeholders in a template, in order of appearance
    Format(FormatArgs),

    /// Split text on a separator, one piece per line
    Split { text: String, separator: String },

    /// Replace every occurrence of a substring
    Replace {
        text: String,
        needle: String,
        replacement: String,
    },

    /// Print every match of a regex, one per line
    Extract {
        pattern: String,

        /// Input file (reads from stdin if not provided)
        input: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default)]
struct FormatArgs {
    /// Template text (with --template-file this becomes the first argument)
    #[arg(required_unless_present = "template_file")]
    template: Option<String>,

    /// Arguments; integers and floats are detected unless --text is set
    #[arg(allow_negative_numbers = true)]
    args: Vec<String>,

    /// Read the template from a file
    #[arg(short = 'f', long)]
    template_file: Option<PathBuf>,

    /// Formatting configuration (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pair each placeholder with its own argument instead of replacing
    /// every copy of the same placeholder text
    #[arg(long)]
    positional: bool,

    /// Fractional digits for float arguments (overrides --config)
    #[arg(long)]
    precision: Option<usize>,

    /// Treat every argument as text. Without it, integers written in
    /// canonical form ("42", "-7") and floats are converted; "007" or "+5"
    /// stay text
    #[arg(long)]
    text: bool,

    /// Print an empty line instead of failing on argument count mismatch
    #[arg(long)]
    compat: bool,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Errors reported by the CLI before exiting with status 1
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    File(#[from] FileError),

    #[error("Error loading config '{}': {source}", path.display())]
    Config { path: PathBuf, source: ConfigError },

    /// Rendered diagnostic for an argument count mismatch
    #[error("{0}")]
    Format(String),

    #[error("Error: {0}")]
    Pattern(#[from] PatternError),

    #[error("Error reading from stdin: {0}")]
    Stdin(io::Error),
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Command::Format(args) => run_format(args, io::stderr().is_terminal()).map(|out| {
            if let Some(out) = out {
                println!("{}", out);
            }
        }),
        Command::Split { text, separator } => {
            for piece in text::split(&text, &separator) {
                println!("{}", piece);
            }
            Ok(())
        }
        Command::Replace {
            text,
            needle,
            replacement,
        } => {
            println!("{}", text::replace_all(&text, &needle, &replacement));
            Ok(())
        }
        Command::Extract { pattern, input } => {
            run_extract(&pattern, input.as_deref(), io::stdin()).map(|matches| {
                for m in matches {
                    println!("{}", m);
                }
            })
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e.to_string().trim_end());
        std::process::exit(1);
    }
}

/// Run `format`; returns the text to print, or `None` when written to --output
fn run_format(args: FormatArgs, color: bool) -> Result<Option<String>, CliError> {
    let FormatArgs {
        template,
        mut args,
        template_file,
        config,
        positional,
        precision,
        text,
        compat,
        output,
    } = args;

    let (template, name) = match &template_file {
        Some(path) => {
            // With a template file every positional is an argument
            if let Some(first) = template {
                args.insert(0, first);
            }
            (fs::read_file(path)?, path.display().to_string())
        }
        None => (template.unwrap_or_default(), "template".to_string()),
    };

    let mut format_config = match &config {
        Some(path) => FormatConfig::from_file(path).map_err(|source| CliError::Config {
            path: path.clone(),
            source,
        })?,
        None => FormatConfig::default(),
    };
    if positional {
        format_config = format_config.with_replace_mode(ReplaceMode::Positional);
    }
    if let Some(precision) = precision {
        format_config = format_config.with_float_precision(precision);
    }
    debug!(?format_config, "formatting");

    let values: Vec<Value> = args
        .iter()
        .map(|arg| if text { Value::from(arg) } else { parse_value(arg) })
        .collect();

    let result = match Formatter::new(format_config).format(&template, &values) {
        Ok(s) => s,
        Err(_) if compat => String::new(),
        Err(e) => return Err(CliError::Format(e.report(&template, &name, color))),
    };

    match &output {
        Some(path) => {
            fs::write_file(path, &result)?;
            Ok(None)
        }
        None => Ok(Some(result)),
    }
}

/// Run `extract` over a file, or `stdin` when no file is given.
///
/// Input is read as bytes; invalid UTF-8 becomes U+FFFD.
fn run_extract(
    pattern: &str,
    input: Option<&Path>,
    mut stdin: impl Read,
) -> Result<Vec<String>, CliError> {
    let bytes = match input {
        Some(path) => fs::read_file_bytes(path)?,
        None => {
            let mut buffer = Vec::new();
            stdin.read_to_end(&mut buffer).map_err(CliError::Stdin)?;
            buffer
        }
    };
    let content = String::from_utf8_lossy(&bytes);
    Ok(text::find_all(pattern, &content)?)
}

/// Canonical integers first, then floats, otherwise text
fn parse_value(arg: &str) -> Value {
    if let Ok(i) = arg.parse::<i128>() {
        // "007" and "+5" are kept as typed
        return if i.to_string() == arg {
            Value::Integer(i)
        } else {
            Value::from(arg)
        };
    }
    match arg.parse::<f64>() {
        Ok(f) if f.is_finite() => Value::Float(f),
        _ => Value::from(arg),
    }
}
