//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::FintrackError;

/// Read a text file, returning `None` if it doesn't exist
pub fn read_text_optional<P: AsRef<Path>>(path: P) -> Result<Option<String>, FintrackError> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(FintrackError::Storage(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The file is either completely replaced or not modified at all.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), FintrackError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            FintrackError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| FintrackError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let written = writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .and_then(|_| writer.get_ref().sync_all());

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(FintrackError::Storage(format!(
            "Failed to write {}: {}",
            temp_path.display(),
            e
        )));
    }
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FintrackError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote file atomically");
    Ok(())
}

/// `<name>.tmp` next to the target
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.txt");

        assert_eq!(read_text_optional(&path).unwrap(), None);
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.txt");

        write_text_atomic(&path, "a\nb").unwrap();
        assert_eq!(read_text_optional(&path).unwrap().as_deref(), Some("a\nb"));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");

        write_text_atomic(&path, "data").unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("transactions.json.tmp").exists());
    }

    #[test]
    fn test_write_replaces_existing_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.txt");

        write_text_atomic(&path, "a much longer first version").unwrap();
        write_text_atomic(&path, "short").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("records.txt");

        write_text_atomic(&path, "x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_directory_is_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(read_text_optional(temp_dir.path()).is_err());
    }
}
