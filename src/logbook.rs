//! Dated, append-only suite logs.
//!
//! Each suite gets one plain-text file per calendar day, named
//! `<suite>_<DDMMYYYY>.txt`. Every run appends a timestamp header, the raw
//! captured stdout, and a delimiter line.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate};

use crate::error::Result;

/// Delimiter line terminating each log entry.
const DELIMITER: &str =
    "--------------------------------------------------------------------------------";

/// Log file name for a suite on a given date.
pub fn log_file_name(suite: &str, date: NaiveDate) -> String {
    format!("{}_{}.txt", suite, date.format("%d%m%Y"))
}

/// Appends a captured test-output block to the suite's log for today.
///
/// Returns the path of the log file written to.
pub fn append_entry(log_dir: &Path, suite: &str, content: &str) -> Result<PathBuf> {
    append_entry_at(log_dir, suite, content, Local::now())
}

/// Appends a captured test-output block using an explicit timestamp.
pub fn append_entry_at(
    log_dir: &Path,
    suite: &str,
    content: &str,
    when: DateTime<Local>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(log_dir)?;

    let path = log_dir.join(log_file_name(suite, when.date_naive()));

    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&path)?;

    writeln!(file, "Test executed at {}", when.format("%H:%M"))?;
    file.write_all(content.as_bytes())?;
    writeln!(file, "{}", DELIMITER)?;

    tracing::debug!(suite = %suite, path = ?path, "appended log entry");
    Ok(path)
}
