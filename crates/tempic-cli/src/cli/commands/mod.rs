//! CLI command handlers. Each command is in its own file.
//!
//! Handlers write user-facing output to the given writer and report how the
//! command ended; only unexpected failures come back as `Err`.

mod completions;
mod info;
mod upload;

pub use completions::{run_completions, run_manpage};
pub use info::run_info;
pub use test::run_test;
pub use upload::run_upload;

use std::io::{self, Write};

fn report_transport_error(out: &mut impl Write, err: &dyn std::fmt::Display) -> io::Result<()> {
    writeln!(out, "Error in HTTP request: {}", err)
}
