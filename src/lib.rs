//! # cpr - copy files and directory trees
//!
//! A small `cp`: copies one regular file, or with `-r` a whole directory
//! tree, and refuses to replace existing files unless `-o` is given.

// Module declarations
pub mod commands;
pub mod config;
pub mod executor;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use types::{CopyStats, CpError, EntryKind};
pub use ui::Logger;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
