//! Run configuration read from the environment.
//!
//! Two variables are required, both read once at startup before anything is
//! fetched:
//!
//! - `RESOURCES_FOLDER_PATH`: the FiveM resources folder to lint (`~` expands to
//!   the home directory)
//! - `IGNORED_SCRIPT_LIST`: comma-separated script folder names to exclude; may be
//!   empty

use crate::error::{LintError, Result};
use std::path::PathBuf;

pub const RESOURCES_FOLDER_PATH: &str = "RESOURCES_FOLDER_PATH";
pub const IGNORED_SCRIPT_LIST: &str = "IGNORED_SCRIPT_LIST";

/// Validated settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub resources_path: PathBuf,
    pub ignored_scripts: Vec<String>,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which returns a variable's value
    /// or `None` when it is unset.
    ///
    /// # Errors
    ///
    /// [`LintError::MissingEnv`] for the first required variable that is unset,
    /// [`LintError::InvalidPath`] if the resources path is blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| lookup(key).ok_or_else(|| LintError::MissingEnv(key.to_string()));

        let ignored_scripts = parse_list(&require(IGNORED_SCRIPT_LIST)?);
        let raw_path = require(RESOURCES_FOLDER_PATH)?;
        if raw_path.trim().is_empty() {
            return Err(LintError::InvalidPath {
                path: PathBuf::from(raw_path),
                reason: format!("{} must not be empty", RESOURCES_FOLDER_PATH),
            });
        }

        Ok(Self {
            resources_path: expand_home(raw_path.trim()),
            ignored_scripts,
        })
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Replace a leading `~` with the home directory. Left as is when there is no
/// home directory to expand to.
fn expand_home(raw: &str) -> PathBuf {
    let Some(rest) = raw.strip_prefix('~') else {
        return PathBuf::from(raw);
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn parses_required_variables() {
        let config = Config::from_lookup(lookup(&[
            (RESOURCES_FOLDER_PATH, "./resources"),
            (IGNORED_SCRIPT_LIST, " es_extended , ,chat,"),
        ]))
        .unwrap();

        assert_eq!(config.resources_path, PathBuf::from("./resources"));
        assert_eq!(config.ignored_scripts, vec!["es_extended", "chat"]);
    }

    #[test]
    fn empty_ignore_list_is_allowed() {
        let config = Config::from_lookup(lookup(&[
            (RESOURCES_FOLDER_PATH, "resources"),
            (IGNORED_SCRIPT_LIST, ""),
        ]))
        .unwrap();
        assert!(config.ignored_scripts.is_empty());
    }

    #[test]
    fn missing_variable_is_reported_by_name() {
        let err = Config::from_lookup(lookup(&[(IGNORED_SCRIPT_LIST, "chat")])).unwrap_err();
        assert!(matches!(err, LintError::MissingEnv(ref key) if key == RESOURCES_FOLDER_PATH));
    }

    #[test]
    fn blank_resources_path_is_rejected() {
        let err = Config::from_lookup(lookup(&[
            (RESOURCES_FOLDER_PATH, "   "),
            (IGNORED_SCRIPT_LIST, ""),
        ]))
        .unwrap_err();
        assert!(matches!(err, LintError::InvalidPath { .. }));
    }

    #[test]
    fn tilde_expands_to_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_home("~/fx/resources"), home.join("fx/resources"));
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
    }
}
