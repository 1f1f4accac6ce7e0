//! Substring and pattern helpers

use regex::Regex;
use tracing::trace;

use crate::error::PatternError;

/// Split `content` on every occurrence of `separator`.
///
/// Empty pieces between adjacent separators are kept, but a trailing empty
/// piece is dropped, so `"a,,b,"` yields `["a", "", "b"]`. An empty separator
/// yields the whole content as the only piece.
pub fn split(content: &str, separator: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    if separator.is_empty() {
        return vec![content.to_string()];
    }

    let mut pieces: Vec<String> = content.split(separator).map(str::to_string).collect();
    if pieces.last().is_some_and(|last| last.is_empty()) {
        pieces.pop();
    }
    pieces
}

/// Replace every non-overlapping occurrence of `needle`, scanning left to right.
///
/// Inserted text is not rescanned. An empty needle leaves `content` unchanged.
pub fn replace_all(content: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return content.to_string();
    }
    content.replace(needle, replacement)
}

/// Collect every non-overlapping match of `pattern` in `content`, in order
pub fn find_all(pattern: &str, content: &str) -> Result<Vec<String>, PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }
    let re = Regex::new(pattern)?;
    let matches: Vec<String> = re.find_iter(content).map(|m| m.as_str().to_string()).collect();
    trace!(pattern, count = matches.len(), "pattern matches");
    Ok(matches)
}
