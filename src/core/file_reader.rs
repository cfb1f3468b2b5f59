//! Bounded file reading
//!
//! Reads the leading bytes of a file as an opaque byte sequence. Content is
//! never decoded, so binary and non-UTF-8 files read the same as text.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::core::error::InspectError;

/// Number of leading bytes captured per file
pub const PREFIX_LEN: usize = 100;

/// Size and leading bytes of a file, read through a single handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePrefix {
    pub size: u64,
    pub bytes: Vec<u8>,
}

/// Open `path`, take its size, and read at most `limit` bytes from the start.
///
/// The handle is dropped before returning, on success and on error.
pub fn read_prefix(path: &Path, limit: usize) -> Result<FilePrefix, InspectError> {
    read_prefix_io(path, limit).map_err(|source| InspectError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

fn read_prefix_io(path: &Path, limit: usize) -> io::Result<FilePrefix> {
    let file = File::open(path)?;
    let size = file.metadata()?.len();

    let capacity = std::cmp::min(size, limit as u64) as usize;
    let mut bytes = Vec::with_capacity(capacity);
    BufReader::new(file)
        .take(limit as u64)
        .read_to_end(&mut bytes)?;

    Ok(FilePrefix { size, bytes })
}
