use crate::git_ops;
use crate::git_utils;

/// Handle `tgit force-pull`: recreate the current local branch from origin.
///
/// Useful when the remote branch has been force-pushed. The sequence stops
/// at the first failing step, so a failed checkout never leads to the
/// current branch being deleted.
pub fn handle_force_pull(source_branch: &str) -> Result<(), Box<dyn std::error::Error>> {
    let current = git_utils::current_branch()?;
    println!("current branch: {}", current);

    git_ops::run_git(&["checkout", source_branch])
        .map_err(|e| format!("failed to checkout {}: {}", source_branch, e))?;

    git_ops::run_git(&["branch", "-D", current.as_str()])
        .map_err(|e| format!("failed to delete branch {}: {}", current, e))?;
    println!("deleted local branch: {}", current);

    git_ops::run_git(&["fetch", "origin", current.as_str()])
        .map_err(|e| format!("failed to fetch {} from origin: {}", current, e))?;

    let tracking = format!("origin/{}", current);
    git_ops::run_git(&["checkout", "-b", current.as_str(), tracking.as_str()])
        .map_err(|e| format!("failed to checkout {} from origin: {}", current, e))?;

    println!("force-pulled branch: {}", current);
    Ok(())
}
