//! Configuration management

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "cpr", version, about)]
pub struct Cli {
    /// Copy directories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// Give details about actions being performed
    #[arg(short, long)]
    pub verbose: bool,

    /// Override destination files if they exist already
    #[arg(short = 'o', long = "override")]
    pub overwrite: bool,

    /// Source directory or file
    pub source: PathBuf,

    /// Destination directory or file
    pub destination: PathBuf,
}

/// Options for a single copy invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Source path
    pub source: PathBuf,

    /// Destination path
    pub destination: PathBuf,

    /// Allow directory sources
    pub recursive: bool,

    /// Print `MESSAGE:` lines
    pub verbose: bool,

    /// Replace existing destination files
    pub overwrite: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            source: cli.source,
            destination: cli.destination,
            recursive: cli.recursive,
            verbose: cli.verbose,
            overwrite: cli.overwrite,
        }
    }
}
