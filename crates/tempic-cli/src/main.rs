mod cli;

use crate::cli::CliCommand;

fn main() {
    // Parse CLI, set up logging and dispatch.
    match CliCommand::run_from_args() {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(err) => {
            eprintln!("tempic error: {:#}", err);
            std::process::exit(1);
        }
    }
}
