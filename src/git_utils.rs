use std::path::Path;

use git2::Repository;
use thiserror::Error;
use url::Url;

use crate::git_ops::{self, GitError};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("not a git repository: {0}")]
    NotARepository(#[source] git2::Error),
    #[error("remote '{0}' not found")]
    RemoteNotFound(String),
    #[error("remote '{0}' has no URL")]
    RemoteMissingUrl(String),
    #[error("unsupported git URL format: {0}")]
    UnsupportedUrl(String),
    #[error("could not determine default branch for remote '{0}'")]
    NoDefaultBranch(String),
    #[error(transparent)]
    Git(#[from] GitError),
}

/// The symbolic name of the currently checked-out branch.
pub fn current_branch() -> Result<String, GitError> {
    current_branch_in(Path::new("."))
}

pub fn current_branch_in(dir: &Path) -> Result<String, GitError> {
    git_ops::capture_git_in(dir, &["rev-parse", "--abbrev-ref", "HEAD"])
}

/// The configured URL of a remote, read from the local repository.
pub fn remote_url(remote: &str) -> Result<String, RepoError> {
    remote_url_in(Path::new("."), remote)
}

pub fn remote_url_in(dir: &Path, remote: &str) -> Result<String, RepoError> {
    let repo = Repository::discover(dir).map_err(RepoError::NotARepository)?;
    let found = repo
        .find_remote(remote)
        .map_err(|_| RepoError::RemoteNotFound(remote.to_string()))?;
    let url = found
        .url()
        .ok_or_else(|| RepoError::RemoteMissingUrl(remote.to_string()))?;
    Ok(url.to_string())
}

/// The `owner/repo` identity of the repository's origin remote.
pub fn repo_full_name() -> Result<String, RepoError> {
    let url = remote_url("origin")?;
    repo_slug(&url)
}

/// Normalize a remote URL to `owner/repo`.
///
/// Handles SSH shorthand (git@host:owner/repo.git), ssh:// URLs and
/// http(s):// URLs. The stripping is purely lexical: drop a trailing .git,
/// then take the last two path segments. Anything else is an error, never a
/// best-effort guess.
pub fn repo_slug(url: &str) -> Result<String, RepoError> {
    let trimmed = url.trim();
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

    if let Some(rest) = trimmed.strip_prefix("git@") {
        let path = rest
            .split_once(':')
            .map(|(_, path)| path)
            .ok_or_else(|| RepoError::UnsupportedUrl(url.to_string()))?;
        return last_two_segments(path).ok_or_else(|| RepoError::UnsupportedUrl(url.to_string()));
    }

    if trimmed.starts_with("ssh://")
        || trimmed.starts_with("https://")
        || trimmed.starts_with("http://")
    {
        let parsed =
            Url::parse(trimmed).map_err(|_| RepoError::UnsupportedUrl(url.to_string()))?;
        return last_two_segments(parsed.path())
            .ok_or_else(|| RepoError::UnsupportedUrl(url.to_string()));
    }

    Err(RepoError::UnsupportedUrl(url.to_string()))
}

fn last_two_segments(path: &str) -> Option<String> {
    let mut segments = path.trim_matches('/').rsplit('/');
    let repo = segments.next().filter(|s| !s.is_empty())?;
    let owner = segments.next().filter(|s| !s.is_empty())?;
    Some(format!("{}/{}", owner, repo))
}

/// Normalize a remote URL to a browsable https URL.
pub fn web_url(url: &str) -> Result<String, RepoError> {
    let trimmed = url.trim();
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

    if let Some(rest) = trimmed.strip_prefix("git@") {
        // git@github.com:owner/repo -> https://github.com/owner/repo
        if let Some((host, path)) = rest.split_once(':') {
            if !host.is_empty() && !path.is_empty() {
                return Ok(format!("https://{}/{}", host, path));
            }
        }
        return Err(RepoError::UnsupportedUrl(url.to_string()));
    }

    if let Some(rest) = trimmed.strip_prefix("ssh://") {
        // ssh://git@github.com/owner/repo -> https://github.com/owner/repo
        let rest = rest.split_once('@').map(|(_, rest)| rest).unwrap_or(rest);
        if let Some((host, path)) = rest.split_once('/') {
            if !host.is_empty() && !path.is_empty() {
                return Ok(format!("https://{}/{}", host, path));
            }
        }
        return Err(RepoError::UnsupportedUrl(url.to_string()));
    }

    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        return Ok(trimmed.to_string());
    }

    Err(RepoError::UnsupportedUrl(url.to_string()))
}

/// Discover the default branch of a remote.
///
/// Reads the remote's symbolic HEAD first; if that ref is missing, probes
/// the conventional names `main` then `master` under refs/remotes. The
/// two-step order is observable behavior and must not change.
pub fn default_branch(remote: &str) -> Result<String, RepoError> {
    default_branch_in(Path::new("."), remote)
}

pub fn default_branch_in(dir: &Path, remote: &str) -> Result<String, RepoError> {
    let head_ref = format!("refs/remotes/{}/HEAD", remote);
    if let Ok(target) = git_ops::capture_git_in(dir, &["symbolic-ref", head_ref.as_str()]) {
        // refs/remotes/origin/main -> main
        if let Some(branch) = target.rsplit('/').next() {
            if !branch.is_empty() {
                return Ok(branch.to_string());
            }
        }
    }

    for candidate in ["main", "master"] {
        let full_ref = format!("refs/remotes/{}/{}", remote, candidate);
        if git_ops::capture_git_in(dir, &["rev-parse", "--verify", full_ref.as_str()]).is_ok() {
            return Ok(candidate.to_string());
        }
    }

    Err(RepoError::NoDefaultBranch(remote.to_string()))
}

/// Open a URL in the platform default browser.
pub fn open_in_browser(url: &str) -> std::io::Result<()> {
    open::that(url)
}
