//! Moves paths into the Trash.
//!
//! Existing paths go through an ordered chain: an external trash command if
//! one works, then a rename into `~/.Trash`, then copy-and-remove when the
//! rename crosses devices. Only failures of the last stage are reported.

use crate::config::TrashConfig;
use crate::errors::CoreError;
use crate::fs::{FileSystem, RealFileSystem};
use crate::helpers::{
    build_unique_basename, resolve_path, sanitize_user_path, trash_basename, unix_millis,
};
use crate::models::{ItemOutcome, MoveResult, PathEntry};
use crate::process::{CommandRunner, SystemCommandRunner};
use crate::resolver::{TrashCommandCache, TrashCommandResolver};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Result of one stage in the fallback chain.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum StageOutcome {
    Finished,
    TryNext,
}

pub struct TrashMover<'c, F = RealFileSystem, R = SystemCommandRunner> {
    fs: F,
    runner: R,
    config: TrashConfig,
    cache: &'c TrashCommandCache,
}

impl TrashMover<'static> {
    /// Real filesystem, real processes, process environment and the process-wide cache.
    pub fn from_env() -> Self {
        Self::new(
            RealFileSystem,
            SystemCommandRunner,
            TrashConfig::from_env(),
            TrashCommandCache::global(),
        )
    }
}

impl<'c, F: FileSystem, R: CommandRunner> TrashMover<'c, F, R> {
    pub fn new(fs: F, runner: R, config: TrashConfig, cache: &'c TrashCommandCache) -> Self {
        Self {
            fs,
            runner,
            config,
            cache,
        }
    }

    pub fn config(&self) -> &TrashConfig {
        &self.config
    }

    /// Moves `paths` (relative ones resolved against `base_dir`) into the Trash.
    pub fn move_paths<S: AsRef<str>>(
        &self,
        paths: &[S],
        base_dir: &Path,
        allow_missing: bool,
    ) -> MoveResult {
        let (entries, missing) = self.classify(paths, base_dir, allow_missing);
        if entries.is_empty() {
            return MoveResult {
                missing,
                errors: Vec::new(),
            };
        }

        if self.delegate(&entries) == StageOutcome::Finished {
            return MoveResult {
                missing,
                errors: Vec::new(),
            };
        }

        let errors = self.relocate_directly(&entries);
        MoveResult { missing, errors }
    }

    /// Splits inputs into existing entries and missing raw strings.
    ///
    /// Missing inputs are only recorded when `allow_missing` is false.
    pub fn classify<S: AsRef<str>>(
        &self,
        paths: &[S],
        base_dir: &Path,
        allow_missing: bool,
    ) -> (Vec<PathEntry>, Vec<String>) {
        let mut entries = Vec::new();
        let mut missing = Vec::new();

        for raw in paths {
            let raw = raw.as_ref();
            let absolute = resolve_path(base_dir, raw);
            if !self.fs.exists(&absolute) {
                if !allow_missing {
                    missing.push(raw.to_string());
                }
                continue;
            }
            entries.push(PathEntry::new(raw, absolute));
        }
        (entries, missing)
    }

    fn delegate(&self, entries: &[PathEntry]) -> StageOutcome {
        let resolver = TrashCommandResolver::new(&self.runner, &self.config, self.cache);
        let Some(command) = resolver.resolve() else {
            return StageOutcome::TryNext;
        };

        let args: Vec<&OsStr> = entries.iter().map(|e| e.absolute.as_os_str()).collect();
        match self.runner.run(command.program(), &args) {
            Ok(Some(0)) => {
                debug!(command = %command, count = entries.len(), "Trash command moved all paths");
                StageOutcome::Finished
            }
            Ok(code) => {
                debug!(command = %command, ?code, "Trash command failed, moving paths directly");
                StageOutcome::TryNext
            }
            Err(err) => {
                debug!(
                    command = %command,
                    error = %err,
                    "Trash command could not run, moving paths directly"
                );
                StageOutcome::TryNext
            }
        }
    }

    fn locate_trash_dir(&self) -> Option<PathBuf> {
        self.config
            .trash_dir()
            .filter(|dir| self.fs.exists(dir))
    }

    fn relocate_directly(&self, entries: &[PathEntry]) -> Vec<String> {
        let Some(trash_dir) = self.locate_trash_dir() else {
            warn!(home = ?self.config.home, "Trash directory unavailable");
            return vec![CoreError::TrashDirUnavailable.to_string()];
        };

        let timestamp = unix_millis(self.fs.now());
        entries
            .iter()
            .filter_map(|entry| match self.relocate_entry(&trash_dir, entry, timestamp) {
                ItemOutcome::Relocated(_) => None,
                ItemOutcome::Errored(message) => Some(message),
            })
            .collect()
    }

    /// Moves one entry into `trash_dir`; the target name is chosen right before the move.
    pub fn relocate_entry(
        &self,
        trash_dir: &Path,
        entry: &PathEntry,
        timestamp: i64,
    ) -> ItemOutcome {
        let target = self.unique_target(trash_dir, &entry.absolute, timestamp);
        debug!(
            source = %sanitize_user_path(&entry.absolute),
            target = %sanitize_user_path(&target),
            "Moving to Trash"
        );

        match self.move_into_trash(&entry.absolute, &target) {
            Ok(()) => ItemOutcome::Relocated(target),
            Err(err) => {
                warn!(path = %entry.raw, error = %err, "Failed to move to Trash");
                ItemOutcome::Errored(format!("Failed to move {} to Trash: {}", entry.raw, err))
            }
        }
    }

    /// First free name among `<base>`, `<base>-<ts>`, `<base>-<ts>-1`, ...
    ///
    /// Dangling symlinks already in the Trash count as taken.
    pub fn unique_target(&self, trash_dir: &Path, absolute: &Path, timestamp: i64) -> PathBuf {
        let base = trash_basename(absolute);
        let mut candidate = trash_dir.join(&base);
        let mut attempt = 0;
        while self.fs.entry_exists(&candidate) {
            candidate = trash_dir.join(build_unique_basename(&base, timestamp, attempt));
            attempt += 1;
        }
        candidate
    }

    fn move_into_trash(&self, from: &Path, to: &Path) -> crate::Result<()> {
        match self.fs.rename(from, to) {
            Ok(()) => Ok(()),
            Err(err) if err.is_cross_device() => {
                debug!(path = %from.display(), "Rename crosses devices, copying instead");
                self.fs.copy_recursive(from, to)?;
                self.fs.remove_all(from)
            }
            Err(err) => Err(err),
        }
    }
}

/// Moves `paths` into the Trash using the process environment and the process-wide
/// trash command cache.
pub fn move_paths_to_trash<S: AsRef<str>>(
    paths: &[S],
    base_dir: impl AsRef<Path>,
    allow_missing: bool,
) -> MoveResult {
    TrashMover::from_env().move_paths(paths, base_dir.as_ref(), allow_missing)
}
