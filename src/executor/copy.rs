//! Whole-file byte copy

use crate::types::CpError;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Copy the full content of `src` into `dest`, replacing what `dest` held
///
/// The source is read into memory in one pass before the destination is
/// opened (and truncated), so `src == dest` leaves the file untouched.
/// Both handles are closed on every return path.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes written
/// * `Err(CpError::Io)` - Read or write failure, nothing is retried
///
/// # Example
/// ```no_run
/// use cpr::executor::dump;
/// use std::path::Path;
///
/// let bytes = dump(Path::new("source.txt"), Path::new("dest.txt"))?;
/// # Ok::<(), cpr::CpError>(())
/// ```
pub fn dump(src: &Path, dest: &Path) -> Result<u64, CpError> {
    let mut content = Vec::new();
    File::open(src)?.read_to_end(&mut content)?;

    let mut dest_file = File::create(dest)?;
    dest_file.write_all(&content)?;
    dest_file.flush()?;

    log::trace!(
        "dumped {} bytes {} -> {}",
        content.len(),
        src.display(),
        dest.display()
    );
    Ok(content.len() as u64)
}
