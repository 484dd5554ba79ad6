//! Freshness validation of previously generated output.
//!
//! A generated file doubles as its own freshness record: its leading comment
//! lines embed the metadata that produced it. Validation reads exactly those
//! lines back and compares each against the currently expected value. Any
//! mismatch in order, count, or content means the file is stale.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::emit::GeneratedMetadata;

/// Check whether an existing generated file matches the given metadata.
///
/// Returns false when the metadata's fingerprint is empty: an unknown
/// generator identity can never vouch for existing output.
pub fn is_current(path: &Path, metadata: &GeneratedMetadata) -> bool {
    if metadata.fingerprint.is_empty() {
        return false;
    }
    leading_lines_match(path, &metadata.lines())
}

/// Compare a file's leading lines against expected values by substring
/// containment (the stored line carries comment decoration around the
/// expected text). Short-circuits on the first miss. An empty expected set
/// is always a mismatch: a file cannot be valid against zero criteria.
pub fn leading_lines_match(path: &Path, expected: &[String]) -> bool {
    if expected.is_empty() {
        return false;
    }
    if !path.is_file() {
        return false;
    }

    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };
    let mut reader = BufReader::new(file);
    let mut line = String::new();

    for value in expected {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => return false,
            Ok(_) => {
                if !line.contains(value.as_str()) {
                    return false;
                }
            }
            Err(_) => return false,
        }
    }

    true
}
