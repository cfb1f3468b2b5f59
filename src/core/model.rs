//! Report model
//!
//! A `FileReport` is produced for each regular file found in the inspected
//! directory and is discarded once rendered.

use std::path::PathBuf;

/// Size and leading bytes of one regular file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// File name as listed (lossily converted for display)
    pub name: String,

    /// Directory joined with the file name
    pub path: PathBuf,

    /// File size in bytes
    pub size: u64,

    /// Raw leading bytes, never decoded
    pub prefix: Vec<u8>,
}

impl FileReport {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        size: u64,
        prefix: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            size,
            prefix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_report_new() {
        let report = FileReport::new("a.txt", "/tmp/a.txt", 5, b"hello".to_vec());
        assert_eq!(report.name, "a.txt");
        assert_eq!(report.path, PathBuf::from("/tmp/a.txt"));
        assert_eq!(report.size, 5);
        assert_eq!(report.prefix, b"hello");
    }
}
