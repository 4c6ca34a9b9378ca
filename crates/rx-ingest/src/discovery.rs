//! Source file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists all regular files in `dir` with the given extension.
///
/// The extension match is case-insensitive. Returns files sorted by
/// filename so record order is stable across runs.
pub fn list_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));

        if matches {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Lists all CSV files in a directory.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    list_files(dir, "csv")
}

/// Lists all JSON files in a directory.
pub fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    list_files(dir, "json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        for name in &["b.json", "a.JSON", "pharmacies.csv", "notes.txt"] {
            std::fs::write(dir.path().join(name), "[]").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();

        dir
    }

    #[test]
    fn test_list_json_files_sorted_and_case_insensitive() {
        let dir = create_test_dir();
        let files = list_json_files(dir.path()).unwrap();

        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name()?.to_str())
            .collect();
        assert_eq!(names, vec!["a.JSON", "b.json"]);
    }

    #[test]
    fn test_list_csv_files() {
        let dir = create_test_dir();
        let files = list_csv_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_missing_directory() {
        let dir = create_test_dir();
        let result = list_json_files(&dir.path().join("absent"));
        assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
    }
}
