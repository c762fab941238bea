//! Moves filesystem paths into the user Trash instead of deleting them.
//! A working external trash command is preferred; otherwise items are moved
//! into `~/.Trash` directly, with collision-safe names and a copy-and-remove
//! fallback for cross-device moves.

pub mod config;
pub mod errors;
pub mod fs;
pub mod helpers;
pub mod models;
pub mod process;
pub mod relocator;
pub mod resolver;

pub use config::TrashConfig;
pub use errors::{CoreError, Result};
pub use fs::{FileSystem, RealFileSystem};
pub use helpers::{
    build_unique_basename,
    resolve_path,
    sanitize_user_path,
    unix_millis,
};
pub use models::{ItemOutcome, MoveResult, PathEntry, TrashCommand};
pub use process::{CommandRunner, SystemCommandRunner};
pub use relocator::{move_paths_to_trash, TrashMover};
pub use resolver::{TrashCommandCache, TrashCommandResolver};

/// Re-export a small stable API surface for command crates.
pub mod prelude {
    pub use crate::{
        config::*,
        errors::{CoreError, Result},
        fs::{FileSystem, RealFileSystem},
        models::*,
        process::{CommandRunner, SystemCommandRunner},
        relocator::{move_paths_to_trash, TrashMover},
        resolver::{TrashCommandCache, TrashCommandResolver},
    };
}
