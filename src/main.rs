use clap::{CommandFactory, Parser};

mod cli;
mod commands;
mod config;
mod dispatch;
mod git_ops;
mod git_utils;
mod template;
mod ticket;

use cli::{Cli, Commands};
use config::ConfigLoader;
use dispatch::Dispatch;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let startup = dispatch::plan(args);

    // The directory switch has to happen before anything that depends on the
    // working directory: config discovery, branch lookup, forwarding.
    if let Some(dir) = &startup.repo_dir {
        change_dir(dir);
    }

    let local_args = match startup.dispatch {
        Dispatch::Forward(args) => git_ops::forward_to_git(&args),
        Dispatch::Local(args) => args,
    };

    let cli = Cli::parse_from(std::iter::once("tgit".to_string()).chain(local_args));

    // Registered with clap for help and completions; the startup scan
    // normally consumes the flag before clap ever sees it.
    if let Some(dir) = &cli.repo_dir {
        change_dir(dir);
    }

    let loader = ConfigLoader::new();

    let result = match &cli.command {
        Some(Commands::Commit { args }) => commands::commit::handle_commit(&loader, args),
        Some(Commands::ForcePull { branch }) => commands::force_pull::handle_force_pull(branch),
        Some(Commands::Init) => commands::init::handle_init().await,
        Some(Commands::Open { remote }) => commands::open::handle_open(remote),
        Some(Commands::Pr { remote, base }) => commands::pr::handle_pr(remote, base.as_deref()),
        Some(Commands::Version) => {
            commands::version::handle_version();
            Ok(())
        }
        Some(Commands::Completion { shell }) => {
            commands::completion::handle_completion(*shell);
            Ok(())
        }
        None => Cli::command().print_help().map_err(Into::into),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn change_dir(dir: &std::path::Path) {
    if let Err(e) = std::env::set_current_dir(dir) {
        eprintln!(
            "Error: failed to change to directory {}: {}",
            dir.display(),
            e
        );
        std::process::exit(1);
    }
}
