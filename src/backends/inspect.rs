//! Directory inspection backend
//!
//! Lists a single directory with walkdir (no recursion) and reports every
//! regular file it contains.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::InspectError;
use crate::core::file_reader::{read_prefix, PREFIX_LEN};
use crate::core::model::FileReport;
use crate::core::render::write_report;

/// Streams one `FileReport` per regular file in a directory.
///
/// The listing is taken in full by [`Inspector::open`]; each call to `next`
/// then examines one entry. Entries come in listing order.
pub struct Inspector {
    entries: std::vec::IntoIter<DirEntry>,
}

impl Inspector {
    /// List `dir`, failing if it is missing, not a directory, or unreadable
    pub fn open(dir: &Path) -> Result<Self, InspectError> {
        let metadata = fs::metadata(dir).map_err(|e| InspectError::from_directory_io(dir, e))?;
        if !metadata.is_dir() {
            return Err(InspectError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }

        let entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .collect::<Result<Vec<_>, walkdir::Error>>()
            .map_err(|e| InspectError::DirectoryUnreadable {
                path: dir.to_path_buf(),
                source: io::Error::from(e),
            })?;

        debug!(dir = %dir.display(), entries = entries.len(), "listed directory");

        Ok(Self {
            entries: entries.into_iter(),
        })
    }

    fn examine(entry: &DirEntry) -> Option<Result<FileReport, InspectError>> {
        let path = entry.path();

        if !is_regular_file(path) {
            debug!(path = %path.display(), "skipping non-regular entry");
            return None;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let report = read_prefix(path, PREFIX_LEN).map(|prefix| {
            trace!(path = %path.display(), size = prefix.size, "read file prefix");
            FileReport::new(name, path, prefix.size, prefix.bytes)
        });
        Some(report)
    }
}

impl Iterator for Inspector {
    type Item = Result<FileReport, InspectError>;

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.entries.by_ref() {
            if let Some(report) = Self::examine(&entry) {
                return Some(report);
            }
        }
        None
    }
}

/// Whether `path` resolves to a regular file, following symlinks.
///
/// Entries that cannot be stat'ed (broken symlinks, entries removed after
/// listing) are not regular files.
fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Collect the reports for every regular file in `dir`
#[allow(dead_code)]
pub fn inspect(dir: &Path) -> Result<Vec<FileReport>, InspectError> {
    Inspector::open(dir)?.collect()
}

/// Stream rendered reports into `writer`, returning how many were written.
///
/// Reports written before an error stay written.
pub fn inspect_to<W: Write>(dir: &Path, mut writer: W) -> Result<usize> {
    let mut count = 0;
    for report in Inspector::open(dir)? {
        let report = report?;
        write_report(&report, &mut writer)
            .with_context(|| format!("Failed to write report for {}", report.path.display()))?;
        count += 1;
    }
    Ok(count)
}

/// Run the inspect command against stdout
pub fn run_inspect(dir: &Path) -> Result<()> {
    let stdout = io::stdout();
    let count = inspect_to(dir, stdout.lock())?;
    debug!(dir = %dir.display(), reports = count, "inspection complete");
    Ok(())
}
