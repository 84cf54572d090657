//! Line-delimited JSON encoding of the records file.
//!
//! # Design
//! The file is the whole dataset: one compact JSON object per line, every line
//! terminated by `\n`. Decoding drops only the empty segment that follows the
//! final terminator; any other line that is not a JSON object is an error, so
//! a damaged file is reported instead of silently truncated.

use crate::error::DecodeError;
use crate::types::Todo;

/// Parse the full contents of a records file.
pub fn decode(contents: &str) -> Result<Vec<Todo>, DecodeError> {
    let mut lines: Vec<&str> = contents.split('\n').collect();
    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }

    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|source| DecodeError {
                line: index + 1,
                source,
            })
        })
        .collect()
}

/// Render records as file contents. An empty sequence is the empty file.
pub fn encode(records: &[Todo]) -> String {
    records.iter().map(encode_line).collect()
}

/// One record followed by its line terminator.
pub fn encode_line(record: &Todo) -> String {
    // A `Map<String, Value>` always serializes.
    let mut line = serde_json::to_string(record).unwrap_or_default();
    line.push('\n');
    line
}
