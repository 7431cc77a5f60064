//! Core type definitions for cpr

mod error;
mod kind;
mod stats;

pub use error::CpError;
pub use kind::EntryKind;
pub use stats::CopyStats;
