use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, SummarizeError};
use crate::logging::Logger;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const INPUT_FILE: &str = "input.txt";
pub const SYSTEM_PROMPT_FILE: &str = "system_prompt.txt";
pub const OUTPUT_FILE: &str = "output.txt";

/// Resolves logical file names against a fixed data directory
#[derive(Debug, Clone)]
pub struct DataPaths {
    base_dir: PathBuf,
}

impl DataPaths {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn resolve(&self, logical_name: &str) -> PathBuf {
        self.base_dir.join(logical_name)
    }

    pub fn input(&self) -> PathBuf {
        self.resolve(INPUT_FILE)
    }

    pub fn system_prompt(&self) -> PathBuf {
        self.resolve(SYSTEM_PROMPT_FILE)
    }

    pub fn output(&self) -> PathBuf {
        self.resolve(OUTPUT_FILE)
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

/// Read a UTF-8 document, rejecting missing, unreadable and blank files.
///
/// `label` names the file in errors ("input file", "system prompt file").
pub fn read_document(path: &Path, label: &str, logger: &Logger) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SummarizeError::NotFound {
            path: path.to_path_buf(),
        },
        _ => SummarizeError::ReadError {
            label: label.to_string(),
            path: path.to_path_buf(),
            source,
        },
    })?;

    if content.trim().is_empty() {
        return Err(SummarizeError::EmptyContent {
            label: label.to_string(),
            path: path.to_path_buf(),
        });
    }

    logger.debug(&format!(
        "Read {} ({} bytes) from {}",
        label,
        content.len(),
        path.display()
    ));

    Ok(content)
}

/// Write the summary, overwriting whatever was there.
pub fn write_summary(path: &Path, text: &str, logger: &Logger) -> Result<()> {
    fs::write(path, text).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SummarizeError::NotFound {
            path: path.to_path_buf(),
        },
        _ => SummarizeError::WriteError {
            path: path.to_path_buf(),
            source,
        },
    })?;

    logger.info(&format!("Summary written to {}", path.display()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_joins_base_dir() {
        let paths = DataPaths::new("/srv/summarize");
        assert_eq!(
            paths.resolve("notes.txt"),
            PathBuf::from("/srv/summarize/notes.txt")
        );
        assert_eq!(paths.input(), PathBuf::from("/srv/summarize/input.txt"));
        assert_eq!(
            paths.system_prompt(),
            PathBuf::from("/srv/summarize/system_prompt.txt")
        );
        assert_eq!(paths.output(), PathBuf::from("/srv/summarize/output.txt"));
    }

    #[test]
    fn test_default_data_dir() {
        assert_eq!(DataPaths::default().input(), PathBuf::from("data/input.txt"));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        let err = read_document(&path, "input file", &Logger::new()).unwrap_err();
        match err {
            SummarizeError::NotFound { path: p } => assert_eq!(p, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_read_whitespace_only_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "  \n\t \n").unwrap();
        let err = read_document(&path, "input file", &Logger::new()).unwrap_err();
        assert!(matches!(err, SummarizeError::EmptyContent { ref label, .. } if label == "input file"));
    }

    #[test]
    fn test_read_invalid_utf8_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();
        let err = read_document(&path, "input file", &Logger::new()).unwrap_err();
        assert!(matches!(err, SummarizeError::ReadError { .. }));
    }

    #[test]
    fn test_read_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = read_document(dir.path(), "system prompt file", &Logger::new()).unwrap_err();
        assert!(matches!(err, SummarizeError::ReadError { ref label, .. } if label == "system prompt file"));
    }

    #[test]
    fn test_read_returns_untrimmed_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "  The quick brown fox jumps.\n").unwrap();
        let content = read_document(&path, "input file", &Logger::new()).unwrap();
        assert_eq!(content, "  The quick brown fox jumps.\n");
    }

    #[test]
    fn test_write_overwrites_existing_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.txt");
        fs::write(&path, "old summary that is longer").unwrap();
        write_summary(&path, "A fox jumps.", &Logger::new()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "A fox jumps.");
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("output.txt");
        let err = write_summary(&path, "A fox jumps.", &Logger::new()).unwrap_err();
        assert!(matches!(err, SummarizeError::NotFound { .. }));
    }

    #[test]
    fn test_write_onto_directory_is_write_error() {
        let dir = TempDir::new().unwrap();
        let err = write_summary(dir.path(), "A fox jumps.", &Logger::new()).unwrap_err();
        assert!(matches!(err, SummarizeError::WriteError { .. }));
    }
}
