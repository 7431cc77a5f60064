//! Executor module for copy operations

pub mod copy;
pub mod directory;
pub mod file;

use crate::types::{CopyStats, CpError, EntryKind};
use crate::ui::Logger;
use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

pub use copy::dump;
pub use directory::copy_directory;
pub use file::copy_file;

/// Copy `source` to `destination`
///
/// Dispatches on what `source` is:
/// * directory - requires `recursive`; `destination` must be a directory or
///   not exist. An existing directory receives `destination/<name of source>`.
/// * regular file - see [`copy_file`].
/// * anything else (including a missing source) - fails.
///
/// Returns the counters of what was written or skipped.
pub fn copy(
    source: &Path,
    destination: &Path,
    overwrite: bool,
    recursive: bool,
    logger: &Logger,
) -> Result<CopyStats, CpError> {
    let mut stats = CopyStats::default();

    match EntryKind::of(source)? {
        EntryKind::Directory => {
            let dest_kind = EntryKind::of(destination)?;
            if dest_kind.exists() && !dest_kind.is_dir() {
                return Err(CpError::NotADirectory {
                    path: destination.to_path_buf(),
                });
            }
            if !recursive {
                return Err(CpError::RecursionRequired {
                    path: source.to_path_buf(),
                });
            }

            let target = if dest_kind.is_dir() {
                join_base_name(destination, source)
            } else {
                destination.to_path_buf()
            };
            log::debug!("directory {} -> {}", source.display(), target.display());

            ensure_dir(&target)?;
            stats.directories += 1;
            copy_directory(source, &target, overwrite, logger, &mut stats)?;
        }
        EntryKind::File => {
            let bytes = copy_file(source, destination, overwrite, logger)?;
            stats.record_file(bytes);
        }
        EntryKind::Other | EntryKind::Missing => {
            return Err(CpError::UnsupportedFileType {
                path: source.to_path_buf(),
            });
        }
    }

    Ok(stats)
}

/// `dir/<file name of source>`, or `dir` when `source` has no file name
pub(crate) fn join_base_name(dir: &Path, source: &Path) -> PathBuf {
    match source.file_name() {
        Some(name) => dir.join(name),
        None => dir.to_path_buf(),
    }
}

/// Create `path` as a directory; an existing directory is fine.
pub(crate) fn ensure_dir(path: &Path) -> io::Result<()> {
    match fs::create_dir(path) {
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        other => other,
    }
}

/// Create an empty file at `path` if there is none, keeping existing content.
pub(crate) fn touch(path: &Path) -> io::Result<()> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(path)
        .map(drop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn quiet() -> Logger {
        Logger::in_memory(false)
    }

    #[test]
    fn test_join_base_name() {
        assert_eq!(
            join_base_name(Path::new("out"), Path::new("a/b/c.txt")),
            PathBuf::from("out/c.txt")
        );
        assert_eq!(
            join_base_name(Path::new("out"), Path::new("..")),
            PathBuf::from("out")
        );
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("d");

        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();

        assert!(dir.is_dir());
    }

    #[test]
    fn test_ensure_dir_over_file_fails() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f");
        fs::write(&file, b"x").unwrap();

        assert!(ensure_dir(&file).is_err());
    }

    #[test]
    fn test_touch_keeps_content() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f");
        fs::write(&file, b"content").unwrap();

        touch(&file).unwrap();
        touch(&temp.path().join("new")).unwrap();

        assert_eq!(fs::read(&file).unwrap(), b"content");
        assert_eq!(fs::read(temp.path().join("new")).unwrap(), b"");
    }

    #[test]
    fn test_copy_file_source() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src.txt");
        fs::write(&src, b"hello").unwrap();

        let stats = copy(&src, &temp.path().join("dst.txt"), false, false, &quiet()).unwrap();

        assert_eq!(stats.files_copied, 1);
        assert_eq!(stats.bytes_copied, 5);
        assert_eq!(stats.directories, 0);
    }

    #[test]
    fn test_directory_requires_recursive() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a");
        let dest = temp.path().join("out");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("x.txt"), b"x").unwrap();

        let err = copy(&src, &dest, false, false, &quiet()).unwrap_err();

        assert!(matches!(err, CpError::RecursionRequired { .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn test_directory_onto_file_fails_first() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a");
        let dest = temp.path().join("file.txt");
        fs::create_dir(&src).unwrap();
        fs::write(&dest, b"x").unwrap();

        // Reported even without recursive
        let err = copy(&src, &dest, false, false, &quiet()).unwrap_err();

        assert!(matches!(err, CpError::NotADirectory { ref path } if path == &dest));
    }

    #[test]
    fn test_directory_into_new_destination() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a");
        let dest = temp.path().join("out");
        fs::create_dir_all(src.join("b")).unwrap();
        fs::write(src.join("x.txt"), b"hello").unwrap();
        fs::write(src.join("b/y.txt"), b"world").unwrap();

        let stats = copy(&src, &dest, false, true, &quiet()).unwrap();

        assert_eq!(fs::read(dest.join("x.txt")).unwrap(), b"hello");
        assert_eq!(fs::read(dest.join("b/y.txt")).unwrap(), b"world");
        assert_eq!(stats.files_copied, 2);
        assert_eq!(stats.directories, 2);
    }

    #[test]
    fn test_directory_into_existing_directory_nests() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a");
        let dest = temp.path().join("out");
        fs::create_dir(&src).unwrap();
        fs::create_dir(&dest).unwrap();
        fs::write(src.join("x.txt"), b"hello").unwrap();

        copy(&src, &dest, false, true, &quiet()).unwrap();

        assert_eq!(fs::read(dest.join("a/x.txt")).unwrap(), b"hello");
        assert!(!dest.join("x.txt").exists());
    }

    #[test]
    fn test_directory_into_existing_nested_target_is_reused() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a");
        let dest = temp.path().join("out");
        fs::create_dir(&src).unwrap();
        fs::create_dir_all(dest.join("a")).unwrap();
        fs::write(src.join("x.txt"), b"hello").unwrap();

        copy(&src, &dest, false, true, &quiet()).unwrap();

        assert_eq!(fs::read(dest.join("a/x.txt")).unwrap(), b"hello");
    }

    #[test]
    fn test_missing_source_is_unsupported() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("ghost");

        let err = copy(&src, &temp.path().join("dst"), true, true, &quiet()).unwrap_err();

        assert!(matches!(err, CpError::UnsupportedFileType { ref path } if path == &src));
    }

    #[test]
    fn test_unstattable_source_is_io_error() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("x".repeat(300));

        let err = copy(&src, &temp.path().join("dst"), false, false, &quiet()).unwrap_err();

        assert!(matches!(err, CpError::Io(_)));
        assert!(!err.is_copy_violation());
    }

    #[cfg(unix)]
    #[test]
    fn test_socket_source_is_unsupported() {
        use std::os::unix::net::UnixListener;

        let temp = TempDir::new().unwrap();
        let sock = temp.path().join("sock");
        let _listener = UnixListener::bind(&sock).unwrap();

        let err = copy(&sock, &temp.path().join("dst"), false, false, &quiet()).unwrap_err();

        assert!(matches!(err, CpError::UnsupportedFileType { .. }));
        assert!(!temp.path().join("dst").exists());
    }
}
