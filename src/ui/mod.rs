//! Terminal output

mod logger;

pub use logger::{Level, Logger, Record};
