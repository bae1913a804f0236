use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "tgit")]
#[command(about = "A git wrapper that prefixes commits with the ticket from your branch name")]
#[command(long_about = "tgit wraps git and automates ticket tracking.

It extracts a ticket identifier from the current branch name using the
regex patterns in your config file and formats commit messages with the
configured template. Any command tgit does not recognize is passed straight
through to git.

Configuration:
  tgit looks for config.yaml in the current directory, then in
  <config dir>/tgit/config.yaml (run `tgit init` to download a starter file).

  Example config:
    global:
      branches:
        - usr/[^/]+/(?P<ticket>[A-Z]+-\\d+)
      commit:
        message: \"[{{.Ticket}}] {{.Message}}\"")]
pub struct Cli {
    /// Git repository directory (default is current directory)
    ///
    /// Consumed before dispatch when given as the first argument, so it also
    /// applies to commands that are forwarded to git.
    #[arg(short = 'C', long = "repo-dir", value_name = "PATH")]
    pub repo_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Commit with an automatic ticket prefix from the branch name
    Commit {
        /// Arguments to pass to git commit (scanned for -m/--message)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Recreate the current local branch from origin after a force push
    ForcePull {
        /// The branch to check out while the current branch is recreated
        #[arg(short, long, default_value = "main")]
        branch: String,
    },
    /// Download the default tgit configuration file
    Init,
    /// Open the repository page in your browser
    Open {
        /// Remote name
        #[arg(short, long, default_value = "origin")]
        remote: String,
    },
    /// Open the pull request creation page in your browser
    Pr {
        /// Remote name
        #[arg(short, long, default_value = "origin")]
        remote: String,
        /// Base branch for comparison (defaults to the remote's default branch)
        #[arg(short, long)]
        base: Option<String>,
    },
    /// Print version information
    Version,
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
