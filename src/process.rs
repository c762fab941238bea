use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs external commands with every standard stream discarded.
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args` and waits for it.
    ///
    /// `Ok(Some(code))` is a normal exit, `Ok(None)` means the process was
    /// killed by a signal, and `Err` means it could not be started at all.
    fn run(&self, program: &Path, args: &[&OsStr]) -> io::Result<Option<i32>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &Path, args: &[&OsStr]) -> io::Result<Option<i32>> {
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        Ok(status.code())
    }
}
