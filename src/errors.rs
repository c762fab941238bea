use std::{io, path::PathBuf};

/// Error type shared by the resolver, the relocator and the filesystem seam.
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    /// File system I/O failure.
    #[error("I/O error while accessing {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] io::Error),

    /// A path is invalid for the current operation.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// The Trash directory is not configured or does not exist.
    #[error("Unable to locate macOS Trash directory (HOME/.Trash).")]
    TrashDirUnavailable,
}

impl CoreError {
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPath(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self::Io(path.into(), error)
    }

    /// True when a rename failed because source and target live on different devices.
    pub fn is_cross_device(&self) -> bool {
        match self {
            Self::Io(_, err) => err.raw_os_error() == Some(libc::EXDEV),
            _ => false,
        }
    }
}

/// Shared result alias for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exdev_is_cross_device() {
        let err = CoreError::io("/a", io::Error::from_raw_os_error(libc::EXDEV));
        assert!(err.is_cross_device());
    }

    #[test]
    fn other_io_errors_are_not_cross_device() {
        let err = CoreError::io("/a", io::Error::from_raw_os_error(libc::EACCES));
        assert!(!err.is_cross_device());
        assert!(!CoreError::TrashDirUnavailable.is_cross_device());
    }

    #[test]
    fn io_display_carries_os_message() {
        let err = CoreError::io("/tmp/x", io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(err.to_string(), "I/O error while accessing /tmp/x: boom");
    }
}
