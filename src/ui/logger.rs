//! User-facing message output

use console::{style, Term};
use std::cell::RefCell;

/// Severity of a user-facing line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Informational, shown only in verbose mode (stdout)
    Message,
    /// Always shown (stderr)
    Warning,
    /// Always shown (stderr)
    Error,
}

impl Level {
    pub fn prefix(self) -> &'static str {
        match self {
            Level::Message => "MESSAGE:",
            Level::Warning => "WARNING:",
            Level::Error => "ERROR:",
        }
    }
}

/// A line recorded by an in-memory logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    pub text: String,
}

impl Record {
    /// Render as it would appear on the terminal, without colors.
    pub fn line(&self) -> String {
        format!("{} {}", self.level.prefix(), self.text)
    }
}

enum Sink {
    Terminal { out: Term, err: Term },
    Memory(RefCell<Vec<Record>>),
}

/// Logging context for one invocation
///
/// Built once from the parsed options and handed to every copy call by
/// reference. Verbosity never changes after construction.
pub struct Logger {
    verbose: bool,
    sink: Sink,
}

impl Logger {
    /// Logger writing to the process stdout/stderr
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            sink: Sink::Terminal {
                out: Term::stdout(),
                err: Term::stderr(),
            },
        }
    }

    /// Logger that keeps lines in memory, see [`Logger::records`]
    pub fn in_memory(verbose: bool) -> Self {
        Self {
            verbose,
            sink: Sink::Memory(RefCell::new(Vec::new())),
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Informational line, dropped unless verbose
    pub fn log(&self, text: &str) {
        if self.verbose {
            self.emit(Level::Message, text);
        }
    }

    pub fn warn(&self, text: &str) {
        self.emit(Level::Warning, text);
    }

    pub fn error(&self, text: &str) {
        self.emit(Level::Error, text);
    }

    /// Lines recorded so far. Always empty for a terminal logger.
    pub fn records(&self) -> Vec<Record> {
        match &self.sink {
            Sink::Memory(records) => records.borrow().clone(),
            Sink::Terminal { .. } => Vec::new(),
        }
    }

    fn emit(&self, level: Level, text: &str) {
        match &self.sink {
            Sink::Terminal { out, err } => {
                let line = match level {
                    Level::Message => format!("{} {}", level.prefix(), text),
                    Level::Warning => {
                        format!("{} {}", style(level.prefix()).yellow().for_stderr(), text)
                    }
                    Level::Error => {
                        format!("{} {}", style(level.prefix()).red().for_stderr(), text)
                    }
                };
                let term = if level == Level::Message { out } else { err };
                if let Err(e) = term.write_line(&line) {
                    log::debug!("failed to write {:?} line: {}", level, e);
                }
            }
            Sink::Memory(records) => records.borrow_mut().push(Record {
                level,
                text: text.to_string(),
            }),
        }
    }
}
