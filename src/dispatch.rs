use std::path::PathBuf;

/// Subcommands handled by tgit itself. Anything else is forwarded to git.
pub const LOCAL_COMMANDS: &[&str] = &[
    "commit",
    "force-pull",
    "init",
    "version",
    "open",
    "pr",
    "completion",
    "help",
];

/// Where an invocation goes after the startup scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Parse the remaining tokens with clap and run a local handler.
    Local(Vec<String>),
    /// Hand the remaining tokens to git verbatim, mirroring its exit status.
    Forward(Vec<String>),
}

/// Result of scanning the raw argument list, before anything runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Startup {
    /// Directory to switch to before dispatching, from a leading -C/--repo-dir.
    pub repo_dir: Option<PathBuf>,
    pub dispatch: Dispatch,
}

/// Scan the raw token list (without argv[0]) and decide how to dispatch.
///
/// A leading `-C <path>` or `--repo-dir <path>` pair is consumed; the
/// directory switch is applied by the caller before config discovery, branch
/// lookup, or forwarding. A trailing `-C` with no value is left in place so
/// git can report it. The next token is then matched against the fixed local
/// command set; unknown tokens mean the whole remainder is forwarded.
pub fn plan(args: Vec<String>) -> Startup {
    let mut repo_dir = None;
    let mut rest = args;

    if matches!(rest.first().map(String::as_str), Some("-C") | Some("--repo-dir")) && rest.len() > 1
    {
        repo_dir = Some(PathBuf::from(rest[1].clone()));
        rest.drain(..2);
    }

    let dispatch = match rest.first().map(String::as_str) {
        None => Dispatch::Local(rest),
        Some("-h") | Some("--help") => Dispatch::Local(rest),
        Some(first) if LOCAL_COMMANDS.contains(&first) => Dispatch::Local(rest),
        Some(_) => Dispatch::Forward(rest),
    };

    Startup { repo_dir, dispatch }
}
