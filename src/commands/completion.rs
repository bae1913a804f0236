use std::io;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Handle `tgit completion`: write a completion script to stdout.
pub fn handle_completion(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "tgit", &mut io::stdout());
}
