use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a report file and return its content
pub fn read_report(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write rendered HTML to a file
pub fn write_html(path: &Path, html: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, html).map_err(IoError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_report_success() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.md");
        fs::write(&path, "## Findings\n\n- one").unwrap();

        let content = read_report(&path).unwrap();
        assert_eq!(content, "## Findings\n\n- one");
    }

    #[test]
    fn test_read_report_not_found() {
        let dir = TempDir::new().unwrap();
        let result = read_report(&dir.path().join("missing.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_html_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("nested").join("report.html");

        write_html(&path, "<p>ok</p>\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>ok</p>\n");
    }

    #[test]
    fn test_write_html_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.html");
        fs::write(&path, "old").unwrap();

        write_html(&path, "<p>new</p>\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>new</p>\n");
    }
}
