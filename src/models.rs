use std::fmt;
use std::path::{Path, PathBuf};

/// A caller-supplied path together with its absolute form.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PathEntry {
    pub raw: String,
    pub absolute: PathBuf,
}

impl PathEntry {
    pub fn new(raw: impl Into<String>, absolute: PathBuf) -> Self {
        Self {
            raw: raw.into(),
            absolute,
        }
    }
}

/// Outcome of one `move_paths_to_trash` call.
///
/// `missing` holds the raw strings of inputs that did not exist (only when
/// missing paths are not allowed); `errors` holds one message per failure.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct MoveResult {
    pub missing: Vec<String>,
    pub errors: Vec<String>,
}

impl MoveResult {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.errors.is_empty()
    }
}

/// An external executable able to move paths into the Trash.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TrashCommand {
    program: PathBuf,
}

impl TrashCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl fmt::Display for TrashCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())
    }
}

/// Terminal state of a single surviving path in the direct fallback.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ItemOutcome {
    Relocated(PathBuf),
    Errored(String),
}
