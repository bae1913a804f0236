use std::cell::OnceCell;
use std::fs;
use std::path::PathBuf;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::template;

/// File name searched in the current working directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config file found (searched {searched}); run `tgit init` to create one")]
    NotFound { searched: String },
    #[error("unable to parse config file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("commit message template must contain {0}")]
    MissingPlaceholder(&'static str),
    #[error("at least one global branch pattern must be defined")]
    NoGlobalPatterns,
    #[error("repository '{0}' must have at least one branch pattern")]
    EmptyRepoPatterns(String),
    #[error("invalid branch pattern `{pattern}` of {scope}: {source}")]
    Regex {
        scope: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("branch pattern `{pattern}` of {scope} must contain a (?P<ticket>...) group")]
    MissingTicketGroup { scope: String, pattern: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub global: GlobalConfig,
    #[serde(default)]
    pub repos: Vec<RepoConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlobalConfig {
    pub branches: Vec<String>,
    pub commit: CommitConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitConfig {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoConfig {
    pub name: String,
    pub branches: Vec<String>,
}

impl Config {
    /// Check structural invariants. Runs once, right after parse.
    fn validate(&self) -> Result<(), ConfigError> {
        let message_template = &self.global.commit.message;
        if !template::ticket_re().is_match(message_template) {
            return Err(ConfigError::MissingPlaceholder(template::TICKET_PLACEHOLDER));
        }
        if !template::message_re().is_match(message_template) {
            return Err(ConfigError::MissingPlaceholder(
                template::MESSAGE_PLACEHOLDER,
            ));
        }

        if self.global.branches.is_empty() {
            return Err(ConfigError::NoGlobalPatterns);
        }
        for repo in &self.repos {
            if repo.branches.is_empty() {
                return Err(ConfigError::EmptyRepoPatterns(repo.name.clone()));
            }
        }

        // Every pattern must compile and declare the ticket group, so
        // resolution can never hit a bad pattern later.
        for (scope, pattern) in self.patterns() {
            let re = Regex::new(pattern).map_err(|source| ConfigError::Regex {
                scope: scope.to_string(),
                pattern: pattern.to_string(),
                source,
            })?;
            if !re.capture_names().flatten().any(|name| name == "ticket") {
                return Err(ConfigError::MissingTicketGroup {
                    scope: scope.to_string(),
                    pattern: pattern.to_string(),
                });
            }
        }

        Ok(())
    }

    /// All branch patterns paired with the scope they belong to ("global" or
    /// the repository name).
    fn patterns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.repos
            .iter()
            .flat_map(|repo| {
                repo.branches
                    .iter()
                    .map(move |pattern| (repo.name.as_str(), pattern.as_str()))
            })
            .chain(
                self.global
                    .branches
                    .iter()
                    .map(|pattern| ("global", pattern.as_str())),
            )
    }
}

/// Discovers, parses and caches the configuration.
///
/// Constructed once in main and passed to the handlers that need it; the
/// parsed result is cached so a second `load` returns the same configuration
/// without touching the filesystem again.
pub struct ConfigLoader {
    search_paths: Vec<PathBuf>,
    cached: OnceCell<Config>,
}

impl ConfigLoader {
    /// Loader with the standard search order: `./config.yaml`, then the
    /// user-scoped config file.
    pub fn new() -> Self {
        let mut search_paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(path) = user_config_path() {
            search_paths.push(path);
        }
        Self::with_paths(search_paths)
    }

    /// Loader with an explicit search order.
    pub fn with_paths(search_paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths,
            cached: OnceCell::new(),
        }
    }

    /// Parse and validate the first readable candidate, caching the result
    /// for the rest of the process.
    pub fn load(&self) -> Result<&Config, ConfigError> {
        if let Some(config) = self.cached.get() {
            return Ok(config);
        }
        let config = self.read()?;
        Ok(self.cached.get_or_init(|| config))
    }

    fn read(&self) -> Result<Config, ConfigError> {
        for path in &self.search_paths {
            let Ok(data) = fs::read_to_string(path) else {
                // Missing or unreadable, try the next candidate.
                continue;
            };
            let config: Config =
                serde_yaml::from_str(&data).map_err(|source| ConfigError::Yaml {
                    path: path.clone(),
                    source,
                })?;
            config.validate()?;
            return Ok(config);
        }
        Err(ConfigError::NotFound {
            searched: self.searched_list(),
        })
    }

    fn searched_list(&self) -> String {
        self.search_paths
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// The user-scoped config file: `<config dir>/tgit/config.yaml`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tgit").join(CONFIG_FILE))
}
