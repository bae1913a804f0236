use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, ExitStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),
    /// A streamed command exited non-zero; its stderr already reached the
    /// terminal, so only the status is carried here.
    #[error("git {command} exited with status {code}")]
    Status { command: String, code: i32 },
    /// A captured command exited non-zero.
    #[error("git {command} failed: {stderr}")]
    Output { command: String, stderr: String },
}

/// Run a git command in the current directory, streaming its output to the
/// terminal. Non-zero exit is an error.
pub fn run_git<S: AsRef<OsStr>>(args: &[S]) -> Result<(), GitError> {
    run_git_in(Path::new("."), args)
}

pub fn run_git_in<S: AsRef<OsStr>>(dir: &Path, args: &[S]) -> Result<(), GitError> {
    let status = Command::new("git").args(args).current_dir(dir).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(GitError::Status {
            command: command_name(args),
            code: exit_code(status),
        })
    }
}

/// Run a git command and return its trimmed stdout.
pub fn capture_git<S: AsRef<OsStr>>(args: &[S]) -> Result<String, GitError> {
    capture_git_in(Path::new("."), args)
}

pub fn capture_git_in<S: AsRef<OsStr>>(dir: &Path, args: &[S]) -> Result<String, GitError> {
    let output = Command::new("git").args(args).current_dir(dir).output()?;
    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(GitError::Output {
            command: command_name(args),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Hand a full argument list to git and exit with its status, success
/// included. Used wherever tgit adds nothing of its own to the invocation.
pub fn forward_to_git(args: &[String]) -> ! {
    match Command::new("git").args(args).status() {
        Ok(status) => std::process::exit(exit_code(status)),
        Err(e) => {
            eprintln!("Error: failed to run git: {}", e);
            std::process::exit(1);
        }
    }
}

fn command_name<S: AsRef<OsStr>>(args: &[S]) -> String {
    args.first()
        .map(|arg| arg.as_ref().to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn exit_code(status: ExitStatus) -> i32 {
    // A signal-terminated child has no code; treat it as a plain failure.
    status.code().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_git_returns_trimmed_stdout() {
        let version = capture_git(&["--version"]).unwrap();
        assert!(version.starts_with("git version"));
        assert_eq!(version, version.trim());
    }

    #[test]
    fn test_capture_git_failure_carries_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let err = capture_git_in(dir.path(), &["rev-parse", "--abbrev-ref", "HEAD"]).unwrap_err();
        match err {
            GitError::Output { command, stderr } => {
                assert_eq!(command, "rev-parse");
                assert!(!stderr.is_empty());
            }
            other => panic!("expected Output error, got {other:?}"),
        }
    }

    #[test]
    fn test_run_git_reports_exit_status() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_git_in(dir.path(), &["--bad-flag-that-does-not-exist"]).unwrap_err();
        assert!(matches!(err, GitError::Status { .. }));
    }
}
