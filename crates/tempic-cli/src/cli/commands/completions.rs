//! `tempic completions <shell>` and `tempic manpage`.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

use crate::cli::{Cli, Outcome};

pub fn run_completions(shell: Shell, out: &mut impl Write) -> Result<Outcome> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
    Ok(Outcome::Success)
}

pub fn run_manpage(out: &mut impl Write) -> Result<Outcome> {
    clap_mangen::Man::new(Cli::command()).render(out)?;
    Ok(Outcome::Success)
}
