use crate::git_utils;

/// Handle `tgit pr`: open the pull request compare page for the current
/// branch against the base branch (the remote's default branch unless
/// overridden).
pub fn handle_pr(remote: &str, base: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let current = git_utils::current_branch()?;
    let url = git_utils::remote_url(remote)?;
    let web = git_utils::web_url(&url)?;

    let base = match base {
        Some(branch) => branch.to_string(),
        None => git_utils::default_branch(remote)?,
    };

    let pr_url = format!("{}/compare/{}...{}", web, base, current);
    println!("opening {}", pr_url);
    git_utils::open_in_browser(&pr_url)?;
    Ok(())
}
