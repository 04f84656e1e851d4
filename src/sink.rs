use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::NaiveDate;

use crate::format::{self, Record};

/// A destination for formatted records. Implementations serialize access to the
/// underlying stream so concurrent callers never interleave partial lines.
pub trait Sink: Send + Sync {
    fn write(&self, record: &Record<'_>) -> io::Result<()>;
}

pub fn daily_file_name(date: NaiveDate) -> String {
    date.format("%d-%m-%Y.log").to_string()
}

/// Append-mode file named by the current date. Always stores uncolored text.
pub struct FileSink {
    file: Mutex<File>,
    path: PathBuf,
}

impl FileSink {
    /// Open (or create) today's log file under `dir`. `dir` must already exist.
    pub fn open(dir: &Path) -> io::Result<Self> {
        let path = dir.join(daily_file_name(chrono::Local::now().date_naive()));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            file: Mutex::new(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&self, record: &Record<'_>) -> io::Result<()> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(file, "{}", format::plain(record))
    }
}

/// Console echo on stderr, colorized by severity.
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&self, record: &Record<'_>) -> io::Result<()> {
        // io::Stderr carries its own lock, one writeln is one line.
        writeln!(io::stderr(), "{}", format::colored(record))
    }
}
