//! Depth-first directory tree copy

use super::{dump, ensure_dir, touch};
use crate::types::{CopyStats, CpError, EntryKind};
use crate::ui::Logger;
use std::fs;
use std::path::Path;

/// Copy every child of `src` into the existing directory `dest`
///
/// Subdirectories are created (or reused) and copied recursively. Children
/// that are neither files nor directories are reported with an error line
/// and skipped; the walk carries on.
///
/// The overwrite guard looks at `dest` itself, not at the child target: a
/// file child is skipped only when `dest` is a regular file and `overwrite`
/// is false. Since `dest` is always a directory here, existing child files
/// get replaced.
///
/// # Errors
/// * IO failures (listing, stat, creating, reading, writing) abort the walk
pub fn copy_directory(
    src: &Path,
    dest: &Path,
    overwrite: bool,
    logger: &Logger,
    stats: &mut CopyStats,
) -> Result<(), CpError> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_child = entry.path();
        let dest_child = dest.join(entry.file_name());

        match EntryKind::of(&src_child)? {
            EntryKind::Directory => {
                logger.log(&format!(
                    "Copy {} -> {}",
                    src_child.display(),
                    dest_child.display()
                ));
                ensure_dir(&dest_child)?;
                stats.directories += 1;
                copy_directory(&src_child, &dest_child, overwrite, logger, stats)?;
            }
            EntryKind::File => {
                if EntryKind::of(dest)?.is_file() && !overwrite {
                    logger.warn(&format!(
                        "Skipping {} -> {} as -o is not present",
                        src_child.display(),
                        dest_child.display()
                    ));
                    stats.skipped += 1;
                } else {
                    touch(&dest_child)?;
                    let bytes = dump(&src_child, &dest_child)?;
                    stats.record_file(bytes);
                }
            }
            EntryKind::Other | EntryKind::Missing => {
                log::debug!("unsupported entry {}", src_child.display());
                logger.error(&format!(
                    "Skipping {} because file type is not supported",
                    src_child.display()
                ));
                stats.skipped += 1;
            }
        }
    }

    Ok(())
}
