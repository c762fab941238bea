//! Environment-derived settings for locating the Trash and trash commands.

use std::collections::{HashMap, HashSet};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Executable names probed when looking for an external trash command.
pub const DEFAULT_CANDIDATE_NAMES: [&str; 2] = ["trash-put", "trash"];

/// Homebrew prefix used when `HOMEBREW_PREFIX` is not set.
pub const DEFAULT_HOMEBREW_PREFIX: &str = "/opt/homebrew";

/// Install location of the `trash` formula under the legacy Intel prefix.
pub const LEGACY_TRASH_BIN_DIR: &str = "/usr/local/opt/trash/bin";

/// Name of the Trash directory inside the home directory.
pub const TRASH_DIR_NAME: &str = ".Trash";

#[derive(Debug, Clone)]
pub struct TrashConfig {
    pub home: Option<PathBuf>,
    pub search_path: Option<OsString>,
    pub homebrew_prefix: PathBuf,
    pub candidate_names: Vec<String>,
}

impl Default for TrashConfig {
    fn default() -> Self {
        Self {
            home: None,
            search_path: None,
            homebrew_prefix: PathBuf::from(DEFAULT_HOMEBREW_PREFIX),
            candidate_names: DEFAULT_CANDIDATE_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl TrashConfig {
    /// Snapshot of the current process environment.
    pub fn from_env() -> Self {
        Self {
            home: env::var_os("HOME").filter(|v| !v.is_empty()).map(PathBuf::from),
            search_path: env::var_os("PATH").filter(|v| !v.is_empty()),
            homebrew_prefix: env::var_os("HOMEBREW_PREFIX")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HOMEBREW_PREFIX)),
            ..Self::default()
        }
    }

    /// Builds a config from an explicit variable map instead of the process environment.
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let get = |key: &str| vars.get(key).filter(|v| !v.is_empty());
        Self {
            home: get("HOME").map(PathBuf::from),
            search_path: get("PATH").map(OsString::from),
            homebrew_prefix: get("HOMEBREW_PREFIX")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HOMEBREW_PREFIX)),
            ..Self::default()
        }
    }

    pub fn with_candidate_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidate_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// `<home>/.Trash`, without checking that it exists.
    pub fn trash_dir(&self) -> Option<PathBuf> {
        self.home.as_ref().map(|home| home.join(TRASH_DIR_NAME))
    }

    /// Directories searched for candidate commands, in probe order and without duplicates.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut dirs = Vec::new();

        let path_dirs = self
            .search_path
            .as_ref()
            .map(|value| env::split_paths(value).collect::<Vec<_>>())
            .unwrap_or_default();

        let package_dirs = [
            self.homebrew_prefix.join("opt").join("trash").join("bin"),
            PathBuf::from(LEGACY_TRASH_BIN_DIR),
        ];

        for dir in path_dirs.into_iter().chain(package_dirs) {
            if dir.as_os_str().is_empty() {
                continue;
            }
            if seen.insert(dir.clone()) {
                dirs.push(dir);
            }
        }
        dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn default_candidate_names() {
        let config = TrashConfig::default();
        assert_eq!(config.candidate_names, vec!["trash-put", "trash"]);
        assert_eq!(config.homebrew_prefix, PathBuf::from("/opt/homebrew"));
    }

    #[test]
    fn trash_dir_requires_home() {
        assert!(TrashConfig::from_vars(&vars(&[])).trash_dir().is_none());
        assert!(TrashConfig::from_vars(&vars(&[("HOME", "")])).trash_dir().is_none());

        let config = TrashConfig::from_vars(&vars(&[("HOME", "/Users/alice")]));
        assert_eq!(config.trash_dir(), Some(PathBuf::from("/Users/alice/.Trash")));
    }

    #[test]
    fn search_dirs_keep_path_order_and_drop_duplicates() {
        let config = TrashConfig::from_vars(&vars(&[
            ("PATH", "/usr/bin::/bin:/usr/bin:/usr/local/opt/trash/bin"),
            ("HOMEBREW_PREFIX", "/brew"),
        ]));
        assert_eq!(
            config.search_dirs(),
            vec![
                PathBuf::from("/usr/bin"),
                PathBuf::from("/bin"),
                PathBuf::from("/usr/local/opt/trash/bin"),
                PathBuf::from("/brew/opt/trash/bin"),
            ]
        );
    }

    #[test]
    fn search_dirs_without_path_still_include_package_prefixes() {
        let config = TrashConfig::from_vars(&vars(&[]));
        assert_eq!(
            config.search_dirs(),
            vec![
                PathBuf::from("/opt/homebrew/opt/trash/bin"),
                PathBuf::from("/usr/local/opt/trash/bin"),
            ]
        );
    }
}
