use regex::Regex;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no branch pattern matched branch '{branch}' of repository '{repo}'")]
    NoMatch { repo: String, branch: String },
    #[error("invalid branch pattern `{pattern}`: {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Resolve the ticket for `branch`: repository-specific rules first, then
/// the global patterns.
///
/// Patterns are evaluated in declared order and the first one whose `ticket`
/// group participates in a match wins. A participating empty capture is a
/// found (empty) ticket; a pattern that matches the branch without the
/// `ticket` group taking part yields no value and evaluation continues with
/// the next pattern.
pub fn resolve_ticket(config: &Config, repo: &str, branch: &str) -> Result<String, ResolveError> {
    for repo_rule in config.repos.iter().filter(|rule| rule.name == repo) {
        for pattern in &repo_rule.branches {
            if let Some(ticket) = match_pattern(pattern, branch)? {
                return Ok(ticket);
            }
        }
    }

    for pattern in &config.global.branches {
        if let Some(ticket) = match_pattern(pattern, branch)? {
            return Ok(ticket);
        }
    }

    Err(ResolveError::NoMatch {
        repo: repo.to_string(),
        branch: branch.to_string(),
    })
}

fn match_pattern(pattern: &str, branch: &str) -> Result<Option<String>, ResolveError> {
    let re = Regex::new(pattern).map_err(|source| ResolveError::Regex {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(re
        .captures(branch)
        .and_then(|caps| caps.name("ticket"))
        .map(|m| m.as_str().to_string()))
}
