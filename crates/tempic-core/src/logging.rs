//! Diagnostics for a short-lived CLI whose stdout is the product.
//!
//! Normally every run appends to `~/.local/state/tempic/tempic.log` and the
//! terminal stays clean. `--verbose` sends the same detail to stderr instead.
//! If the log file cannot be opened, only errors reach stderr. `RUST_LOG`
//! overrides the level in every mode.

use anyhow::Result;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Where log lines end up for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogMode {
    File,
    Verbose,
    Fallback,
}

fn directives(mode: LogMode) -> &'static str {
    match mode {
        LogMode::File | LogMode::Verbose => "warn,tempic_core=debug,tempic_cli=debug",
        LogMode::Fallback => "error",
    }
}

pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tempic")?;
    Ok(xdg_dirs.place_state_file("tempic.log")?)
}

fn open_log(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn install<W>(writer: W, mode: LogMode)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(mode)));
    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(mode == LogMode::Verbose)
        .try_init();
}

/// Installs the global subscriber. Never fails: a broken log file degrades
/// to errors-only on stderr.
pub fn init(verbose: bool) -> LogTarget {
    if verbose {
        install(io::stderr, LogMode::Verbose);
        return LogTarget::Stderr;
    }

    let opened = log_file_path().and_then(|path| Ok((open_log(&path)?, path)));
    match opened {
        Ok((file, path)) => {
            install(Mutex::new(file), LogMode::File);
            tracing::debug!("logging to {}", path.display());
            LogTarget::File(path)
        }
        Err(e) => {
            install(io::stderr, LogMode::Fallback);
            tracing::error!("cannot open log file, logging errors to stderr: {:#}", e);
            LogTarget::Stderr
        }
    }
}
