use crate::config::ConfigLoader;
use crate::git_ops;
use crate::git_utils;
use crate::template;
use crate::ticket;

/// Result of scanning the raw `tgit commit` argument list.
#[derive(Debug, PartialEq, Eq)]
pub struct MessageScan {
    /// Value of the first -m/--message flag, if any.
    pub message: Option<String>,
    /// Every other token, in original order, forwarded to git commit.
    pub passthrough: Vec<String>,
}

/// Scan the token list for the message flag without a structured parser.
///
/// Unknown flags must reach git unaltered, so the scan only interprets the
/// message flag spellings (-m v, -mv, --message v, --message=v) and keeps
/// everything else in place. A message flag with no value is left in the
/// passthrough list for git to reject with its own diagnostics.
pub fn split_message_flag(args: &[String]) -> MessageScan {
    let mut message = None;
    let mut passthrough = Vec::new();

    let mut tokens = args.iter();
    while let Some(token) = tokens.next() {
        if message.is_some() {
            passthrough.push(token.clone());
        } else if token == "-m" || token == "--message" {
            match tokens.next() {
                Some(value) => message = Some(value.clone()),
                None => passthrough.push(token.clone()),
            }
        } else if let Some(value) = token.strip_prefix("--message=") {
            message = Some(value.to_string());
        } else if let Some(value) = token.strip_prefix("-m").filter(|_| !token.starts_with("--")) {
            message = Some(value.to_string());
        } else {
            passthrough.push(token.clone());
        }
    }

    MessageScan {
        message,
        passthrough,
    }
}

/// Handle `tgit commit`.
///
/// Without a message flag tgit adds nothing: the whole argument list goes to
/// `git commit` and the process exits with git's status. With one, the
/// ticket is resolved from the current branch and the configured template
/// becomes the commit message.
pub fn handle_commit(
    loader: &ConfigLoader,
    args: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let scan = split_message_flag(args);
    let Some(message) = scan.message else {
        let mut git_args = vec!["commit".to_string()];
        git_args.extend(args.iter().cloned());
        git_ops::forward_to_git(&git_args);
    };

    let repo = git_utils::repo_full_name()?;
    let branch = git_utils::current_branch()?;
    let config = loader.load()?;
    let ticket = ticket::resolve_ticket(config, &repo, &branch)?;
    let rendered =
        template::render_commit_message(&config.global.commit.message, &ticket, &message)?;
    println!("commit message: {}", rendered);

    let mut git_args = vec!["commit".to_string(), "-m".to_string(), rendered];
    git_args.extend(scan.passthrough);
    git_ops::run_git(&git_args)?;
    Ok(())
}
