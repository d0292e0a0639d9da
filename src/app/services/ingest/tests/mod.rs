//! Tests for the ingestion pipeline

pub mod pipeline_tests;

use std::fs;
use std::path::Path;

/// Write lines to a file in Latin-1 encoding with `\n` terminators.
///
/// Test fixture content stays within U+00FF, so the byte value of each
/// character is its Latin-1 encoding.
pub fn write_latin1_file(path: &Path, lines: &[String]) {
    let mut bytes = Vec::new();
    for line in lines {
        bytes.extend(line.chars().map(|c| c as u32 as u8));
        bytes.push(b'\n');
    }
    fs::write(path, bytes).unwrap();
}
