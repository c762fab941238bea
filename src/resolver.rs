//! Discovery of a working external trash command.
//!
//! Candidates are probed by running them, not by looking at the disk, so a
//! bare name resolved through `PATH` works and non-executable files are skipped.
//! The outcome is memoized in a [`TrashCommandCache`].

use crate::config::TrashConfig;
use crate::models::TrashCommand;
use crate::process::CommandRunner;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

/// Harmless flag passed to each candidate while probing.
pub const PROBE_FLAG: &str = "--help";

static GLOBAL_CACHE: TrashCommandCache = TrashCommandCache::new();

/// Once-initialized slot holding the resolution outcome, including "none found".
#[derive(Debug, Default)]
pub struct TrashCommandCache {
    slot: OnceLock<Option<TrashCommand>>,
}

impl TrashCommandCache {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Process-wide cache used by the default composition root.
    pub fn global() -> &'static TrashCommandCache {
        &GLOBAL_CACHE
    }

    /// `None` until resolution ran; afterwards the cached outcome.
    pub fn get(&self) -> Option<Option<&TrashCommand>> {
        self.slot.get().map(Option::as_ref)
    }

    pub fn get_or_resolve<F>(&self, resolve: F) -> Option<TrashCommand>
    where
        F: FnOnce() -> Option<TrashCommand>,
    {
        self.slot.get_or_init(resolve).clone()
    }

    /// Forgets the cached outcome so the next lookup probes again.
    pub fn reset(&mut self) {
        self.slot = OnceLock::new();
    }
}

pub struct TrashCommandResolver<'a, R: CommandRunner> {
    runner: &'a R,
    config: &'a TrashConfig,
    cache: &'a TrashCommandCache,
}

impl<'a, R: CommandRunner> TrashCommandResolver<'a, R> {
    pub fn new(runner: &'a R, config: &'a TrashConfig, cache: &'a TrashCommandCache) -> Self {
        Self {
            runner,
            config,
            cache,
        }
    }

    /// Returns the first working trash command, probing only on the first call.
    pub fn resolve(&self) -> Option<TrashCommand> {
        self.cache.get_or_resolve(|| self.search())
    }

    /// Every bare candidate name plus each name joined with each search
    /// directory, in probe order and without duplicates.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let dirs = self.config.search_dirs();
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for name in &self.config.candidate_names {
            let joined = dirs.iter().map(|dir| dir.join(name));
            for candidate in std::iter::once(PathBuf::from(name)).chain(joined) {
                if seen.insert(candidate.clone()) {
                    candidates.push(candidate);
                }
            }
        }
        candidates
    }

    fn search(&self) -> Option<TrashCommand> {
        let found = self
            .candidates()
            .into_iter()
            .find(|candidate| self.probe(candidate))
            .map(TrashCommand::new);

        match &found {
            Some(command) => debug!(command = %command, "Resolved trash command"),
            None => debug!("No working trash command found"),
        }
        found
    }

    /// Exit status 0 or 1 means the binary ran; anything else keeps the search going.
    fn probe(&self, candidate: &Path) -> bool {
        match self.runner.run(candidate, &[OsStr::new(PROBE_FLAG)]) {
            Ok(Some(0 | 1)) => true,
            Ok(code) => {
                debug!(candidate = %candidate.display(), ?code, "Trash command probe rejected");
                false
            }
            Err(err) => {
                debug!(
                    candidate = %candidate.display(),
                    error = %err,
                    "Trash command not executable"
                );
                false
            }
        }
    }
}
