//! CLI tests: argument parsing and handler output.

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    parse_cli(args).command.expect("subcommand")
}

pub(super) fn parse_cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}


// Same stand-in server the core integration tests use.
#[allow(dead_code)]
#[path = "../../../../tempic-core/tests/common/api_server.rs"]
mod api_server;
