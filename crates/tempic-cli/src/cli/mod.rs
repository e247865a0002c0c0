//! CLI for the TemPIC command line toolkit.

mod commands;
mod context;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io::{self, Write};
use std::path::PathBuf;
use tempic_core::config::{self, TempicConfig};
use tempic_core::logging;

use commands::{run_completions, run_info, run_manpage, run_test, run_upload};
pub use context::{Outcome, RunContext};

/// Top-level CLI for TemPIC instances.
#[derive(Debug, Parser)]
#[command(name = "tempic", version)]
#[command(about = "TemPIC command line toolkit", long_about = None)]
pub struct Cli {
    /// Base URL of the TemPIC instance to use (e.g. http://tempic.example.com:1234).
    #[arg(
        long = "host",
        short = 'u',
        visible_alias = "url",
        env = "TEMPIC_HOST",
        global = true,
        value_name = "URL"
    )]
    pub host: Option<String>,

    /// Log diagnostics to stderr instead of the log file.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Checks if the host is reachable and working.
    #[command(visible_alias = "t")]
    Test,

    /// Displays album information.
    #[command(visible_alias = "i")]
    Info {
        /// Album ID.
        #[arg(long = "album-id", default_value = "")]
        album_id: String,
    },

    /// Uploads one or multiple file(s) and creates an album.
    ///
    /// Only the first file is sent.
    #[command(visible_alias = "up")]
    Upload {
        /// Album lifetime.
        #[arg(long, default_value = "default")]
        lifetime: String,
        /// Album title.
        #[arg(long, default_value = "")]
        title: String,
        /// Album description.
        #[arg(long, visible_alias = "desc", default_value = "")]
        description: String,
        /// File(s) to upload.
        files: Vec<PathBuf>,
    },

    /// Print a shell completion script to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Manpage,
}

impl CliCommand {
    pub fn run_from_args() -> Result<Outcome> {
        let cli = Cli::parse();
        let log_target = logging::init(cli.verbose);
        tracing::debug!(?log_target, "starting");
        let cfg = match config::load_or_init() {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("could not load config, using defaults: {:#}", e);
                TempicConfig::default()
            }
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let outcome = dispatch(cli, &cfg, &mut out)?;
        out.flush()?;
        Ok(outcome)
    }
}

/// Runs the parsed command, writing user output to `out`.
pub fn dispatch(cli: Cli, cfg: &TempicConfig, out: &mut impl Write) -> Result<Outcome> {
    let ctx = RunContext::new(cli.host.or_else(|| cfg.host.clone()), cfg.http_options());

    let Some(command) = cli.command else {
        Cli::command().write_help(out)?;
        return Ok(Outcome::Success);
    };

    match command {
        CliCommand::Test => run_test(&ctx, out),
        CliCommand::Info { album_id } => run_info(&ctx, &album_id, out),
        CliCommand::Upload {
            lifetime,
            title,
            description,
            files,
        } => run_upload(&ctx, &lifetime, &title, &description, &files, out),
        CliCommand::Completions { shell } => run_completions(shell, out),
        CliCommand::Manpage => run_manpage(out),
    }
}

#[cfg(test)]
mod tests;
