use predicates::prelude::*;

use test_utils::{DEFAULT_TEST_CONFIG, TestRepo};

#[test]
fn test_commit_prefixes_message_with_ticket() {
    let repo = TestRepo::with_commit()
        .with_origin("https://github.com/owner/repo.git")
        .checkout("usr/john/JIRA-1234")
        .write_config(DEFAULT_TEST_CONFIG);
    repo.add_file("feature.txt", "feature content")
        .git_add(&["feature.txt"]);

    repo.tgit(&["commit", "-m", "fix bug"]).assert().success();

    assert_eq!(repo.last_commit_message(), "[JIRA-1234] fix bug");
}

#[test]
fn test_commit_uses_repository_specific_rule() {
    let repo = TestRepo::with_commit()
        .with_origin("git@github.com:owner/repo.git")
        .checkout("feature/ABC-9")
        .write_config(DEFAULT_TEST_CONFIG);
    repo.add_file("feature.txt", "x").git_add(&["feature.txt"]);

    repo.tgit(&["commit", "-m", "add feature"]).assert().success();

    assert_eq!(repo.last_commit_message(), "[ABC-9] add feature");
}

#[test]
fn test_commit_long_message_flag_with_equals() {
    let repo = TestRepo::with_commit()
        .with_origin("https://github.com/owner/repo.git")
        .checkout("usr/john/JIRA-7")
        .write_config(DEFAULT_TEST_CONFIG);
    repo.add_file("a.txt", "a").git_add(&["a.txt"]);

    repo.tgit(&["commit", "--message=tidy up"]).assert().success();

    assert_eq!(repo.last_commit_message(), "[JIRA-7] tidy up");
}

#[test]
fn test_commit_forwards_other_flags() {
    let repo = TestRepo::with_commit()
        .with_origin("https://github.com/owner/repo.git")
        .checkout("usr/john/JIRA-2")
        .write_config(DEFAULT_TEST_CONFIG);

    // Nothing is staged; the commit only succeeds if --allow-empty survives
    // the scan and reaches git.
    repo.tgit(&["commit", "-m", "empty", "--allow-empty"])
        .assert()
        .success();

    assert_eq!(repo.last_commit_message(), "[JIRA-2] empty");
}

#[test]
fn test_commit_without_message_flag_is_passthrough() {
    let repo = TestRepo::with_commit();
    repo.add_file("msg.txt", "raw message from file")
        .add_file("feature.txt", "x")
        .git_add(&["feature.txt"]);

    // No -m flag: tgit must not resolve a ticket or require a config, even
    // though neither an origin remote nor a config file exists here.
    repo.tgit(&["commit", "-F", "msg.txt"]).assert().success();

    assert_eq!(repo.last_commit_message(), "raw message from file");
}

#[test]
fn test_commit_fails_when_no_pattern_matches() {
    let repo = TestRepo::with_commit()
        .with_origin("https://github.com/owner/repo.git")
        .checkout("plain-branch")
        .write_config(DEFAULT_TEST_CONFIG);
    repo.add_file("a.txt", "a").git_add(&["a.txt"]);

    repo.tgit(&["commit", "-m", "fix bug"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("plain-branch"));

    // The failed resolution must abort the commit entirely.
    assert_eq!(repo.last_commit_message(), "Initial commit");
}

#[test]
fn test_commit_fails_without_config_file() {
    let repo = TestRepo::with_commit()
        .with_origin("https://github.com/owner/repo.git")
        .checkout("usr/john/JIRA-1");
    repo.add_file("a.txt", "a").git_add(&["a.txt"]);

    repo.tgit(&["commit", "-m", "fix bug"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tgit init"));
}

#[test]
fn test_commit_fails_with_invalid_config() {
    let repo = TestRepo::with_commit()
        .with_origin("https://github.com/owner/repo.git")
        .checkout("usr/john/JIRA-1")
        .write_config(
            r#"
global:
  branches:
    - usr/[^/]+/(?P<ticket>[A-Z]+-\d+)
  commit:
    message: "no placeholders here"
"#,
        );
    repo.add_file("a.txt", "a").git_add(&["a.txt"]);

    repo.tgit(&["commit", "-m", "fix bug"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("{{.Ticket}}"));
}

#[test]
fn test_commit_fails_without_origin_remote() {
    let repo = TestRepo::with_commit()
        .checkout("usr/john/JIRA-1")
        .write_config(DEFAULT_TEST_CONFIG);
    repo.add_file("a.txt", "a").git_add(&["a.txt"]);

    repo.tgit(&["commit", "-m", "fix bug"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("origin"));
}
