//! Single file copy with destination resolution

use super::{dump, join_base_name, touch};
use crate::types::{CpError, EntryKind};
use crate::ui::Logger;
use std::path::Path;

/// Copy the regular file `src` to `dest`
///
/// When `dest` is an existing directory the file lands at
/// `dest/<file name of src>`. An existing target file is only replaced
/// when `overwrite` is set.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(CpError::OverwriteDenied)` - Target exists and `overwrite` is false
/// * `Err(CpError::Io)` - Underlying IO failure
pub fn copy_file(
    src: &Path,
    dest: &Path,
    overwrite: bool,
    logger: &Logger,
) -> Result<u64, CpError> {
    let target = if EntryKind::of(dest)?.is_dir() {
        join_base_name(dest, src)
    } else {
        dest.to_path_buf()
    };

    if EntryKind::of(&target)?.is_file() && !overwrite {
        log::debug!("refusing to replace {}", target.display());
        return Err(CpError::OverwriteDenied { path: target });
    }

    logger.log(&format!("Copy {} -> {}", src.display(), target.display()));
    touch(&target)?;
    dump(src, &target)
}
