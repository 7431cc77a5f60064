//! EntryKind - What a path points at, decided at use time

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Classification of a filesystem path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file
    File,

    /// Directory
    Directory,

    /// Exists but is neither (device, socket, fifo, ...)
    Other,

    /// Nothing at this path, or a symlink that leads nowhere
    Missing,
}

impl EntryKind {
    /// Classify `path`, following symlinks.
    ///
    /// Absent paths and dangling or looping symlinks are `Missing`. Any
    /// other stat failure (permissions, name too long, ...) is returned.
    pub fn of(path: &Path) -> io::Result<Self> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(EntryKind::Directory),
            Ok(meta) if meta.is_file() => Ok(EntryKind::File),
            Ok(_) => Ok(EntryKind::Other),
            Err(e) if is_unresolvable(&e) => Ok(EntryKind::Missing),
            Err(e) => Err(e),
        }
    }

    pub fn exists(self) -> bool {
        self != EntryKind::Missing
    }

    pub fn is_file(self) -> bool {
        self == EntryKind::File
    }

    pub fn is_dir(self) -> bool {
        self == EntryKind::Directory
    }
}

/// Nothing to classify: absent, below a non-directory, or a symlink loop.
fn is_unresolvable(e: &io::Error) -> bool {
    match e.kind() {
        ErrorKind::NotFound | ErrorKind::NotADirectory => true,
        #[cfg(unix)]
        _ if e.raw_os_error() == Some(libc::ELOOP) => true,
        _ => false,
    }
}
