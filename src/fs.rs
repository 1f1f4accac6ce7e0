//! Whole-file and line-oriented file helpers

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::FileError;

/// Read a file's raw bytes
pub fn read_file_bytes(path: &Path) -> Result<Vec<u8>, FileError> {
    let content = fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read file");
    Ok(content)
}

/// Write raw bytes to `path`, truncating any existing file
pub fn write_file_bytes(path: &Path, content: &[u8]) -> Result<(), FileError> {
    fs::write(path, content).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Read a UTF-8 file into a string.
///
/// Invalid UTF-8 is reported as a read error of kind `InvalidData`.
pub fn read_file(path: &Path) -> Result<String, FileError> {
    let bytes = read_file_bytes(path)?;
    String::from_utf8(bytes).map_err(|e| FileError::Read {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })
}

/// Read a UTF-8 file as lines.
///
/// Lines are split on `\n` only; a trailing newline does not add an empty line.
pub fn read_file_lines(path: &Path) -> Result<Vec<String>, FileError> {
    let content = read_file(path)?;
    let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();
    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    Ok(lines)
}

/// Write `content` to `path`, truncating any existing file
pub fn write_file(path: &Path, content: &str) -> Result<(), FileError> {
    write_file_bytes(path, content.as_bytes())
}

/// Write each line followed by `\n`
pub fn write_file_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<(), FileError> {
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    write_file(path, &content)
}
