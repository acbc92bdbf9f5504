//! Logging setup for the command-line driver.
//!
//! Records go through the `log` facade to an `env_logger` backend that
//! writes `LEVEL message` lines to stderr. `RUST_LOG`, when set, takes
//! precedence over the `--debug` flag. With a log file enabled, every
//! line is also appended to that file behind a local timestamp.

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::env;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const LOG_FILE_NAME: &str = "report.log";

// The logger is installed once per process; the file it copies into can
// still be swapped by later calls.
static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Copies each formatted record to stderr and to the current log file.
struct TeeWriter;

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        let mut guard = LOG_FILE.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(file) = guard.as_mut() {
            append_stamped(file, buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        let mut guard = LOG_FILE.lock().unwrap_or_else(|e| e.into_inner());
        match guard.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

fn append_stamped<W: Write>(out: &mut W, line: &[u8]) -> io::Result<()> {
    let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    write!(out, "{} - ", stamp)?;
    out.write_all(line)
}

pub fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE_NAME)
}

pub fn determine_level(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the global logger and attaches `log_file`, if any.
///
/// Fails only when the log file cannot be opened. A logger installed
/// earlier in the process is kept; only its file is replaced.
pub fn init_logging(debug: bool, log_file: Option<&Path>) -> Result<()> {
    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file '{}'", path.display()))?;
        *LOG_FILE.lock().unwrap_or_else(|e| e.into_inner()) = Some(file);
    }

    let mut builder = Builder::new();
    if env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(determine_level(debug));
    }
    builder.format(|buf, record| writeln!(buf, "{} {}", record.level(), record.args()));
    builder.target(Target::Pipe(Box::new(TeeWriter)));
    let _ = builder.try_init();

    if let Some(path) = log_file {
        log::info!("Log file used: {}", path.display());
    }
    Ok(())
}
