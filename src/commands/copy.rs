//! Main copy command

use crate::executor;
use crate::types::{CopyStats, CpError};
use crate::ui::Logger;
use crate::Config;
use indicatif::HumanBytes;

/// Run the copy described by `config`
///
/// Verbose runs end with a one-line summary of what was written.
pub fn run(config: &Config, logger: &Logger) -> Result<CopyStats, CpError> {
    log::debug!("running with {:?}", config);

    let stats = executor::copy(
        &config.source,
        &config.destination,
        config.overwrite,
        config.recursive,
        logger,
    )?;

    if logger.is_verbose() {
        logger.log(&summary(&stats));
    }

    Ok(stats)
}

fn summary(stats: &CopyStats) -> String {
    let mut line = format!(
        "Copied {} file{}, {}",
        stats.files_copied,
        if stats.files_copied == 1 { "" } else { "s" },
        HumanBytes(stats.bytes_copied)
    );
    if stats.skipped > 0 {
        line.push_str(&format!(
            ". Skipped {} entr{}",
            stats.skipped,
            if stats.skipped == 1 { "y" } else { "ies" }
        ));
    }
    line
}
