//! Filesystem access for Posti data files
//!
//! Handles discovering the newest dated data file of a family in the data
//! directory and reading its Latin-1 content as lines.

use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Find the newest data file matching the given glob pattern.
///
/// The data files carry their snapshot date in the name
/// (`PCF_20240503.dat`), so descending filename order puts the newest file
/// first. Returns `None` when the directory holds no match (including when
/// the directory itself does not exist).
pub fn latest_data_file(data_dir: &Path, pattern: &str) -> Result<Option<PathBuf>> {
    let full_pattern = data_dir.join(pattern);
    let full_pattern = full_pattern.to_string_lossy();

    let mut matches: Vec<PathBuf> = glob::glob(&full_pattern)
        .map_err(|e| {
            Error::file_discovery(format!("Invalid file pattern '{}': {}", full_pattern, e))
        })?
        .filter_map(|entry| entry.ok())
        .collect();

    matches.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
    debug!(
        "Found {} file(s) matching {} in {}",
        matches.len(),
        pattern,
        data_dir.display()
    );

    Ok(matches.into_iter().next())
}

/// Read a Latin-1 encoded file as lines.
///
/// The whole file is read and released before decoding; the decoded lines
/// have their line terminators stripped.
pub fn read_latin1_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;

    let (text, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
    Ok(text.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_latest_data_file_picks_newest_by_name() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["PCF_20240101.dat", "PCF_20240503.dat", "PCF_20231215.dat"] {
            fs::write(temp_dir.path().join(name), "x").unwrap();
        }
        // Other families and extensions are not picked up
        fs::write(temp_dir.path().join("BAF_20990101.dat"), "x").unwrap();
        fs::write(temp_dir.path().join("PCF_20990101.bak"), "x").unwrap();

        let latest = latest_data_file(temp_dir.path(), "PCF_*.dat")
            .unwrap()
            .unwrap();
        assert_eq!(latest.file_name().unwrap(), "PCF_20240503.dat");
    }

    #[test]
    fn test_latest_data_file_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(
            latest_data_file(temp_dir.path(), "PCF_*.dat")
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_latest_data_file_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("no-such-dir");
        assert!(latest_data_file(&missing, "PCF_*.dat").unwrap().is_none());
    }

    #[test]
    fn test_read_latin1_lines_decodes_scandinavian_letters() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("PCF_20240503.dat");
        // "Hämeenlinna\r\nÅbo\n" in Latin-1
        let bytes: Vec<u8> = "Hämeenlinna\r\nÅbo\n"
            .chars()
            .map(|c| c as u32 as u8)
            .collect();
        fs::write(&path, bytes).unwrap();

        let lines = read_latin1_lines(&path).unwrap();
        assert_eq!(lines, ["Hämeenlinna", "Åbo"]);
    }

    #[test]
    fn test_read_latin1_lines_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_latin1_lines(&temp_dir.path().join("PCF_20240503.dat"));
        assert!(result.is_err());
    }
}
