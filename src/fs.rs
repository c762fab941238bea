use crate::errors::CoreError;
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;
use walkdir::WalkDir;

/// Filesystem abstraction boundary for the relocator.
///
/// Only the operations a move into the Trash needs are exposed, which keeps
/// fakes small when tests need to inject failures such as a cross-device rename.
pub trait FileSystem: Send + Sync {
    /// Returns the current time in wall-clock format.
    fn now(&self) -> SystemTime;

    /// Returns true when path exists (follows symlinks).
    fn exists(&self, path: &Path) -> bool;

    /// Returns true when an entry exists at path, including a dangling symlink.
    fn entry_exists(&self, path: &Path) -> bool;

    /// Renames/moves a path.
    fn rename(&self, from: &Path, to: &Path) -> crate::Result<()>;

    /// Copies a file, symlink or whole directory tree to `to`.
    fn copy_recursive(&self, from: &Path, to: &Path) -> crate::Result<()>;

    /// Removes a file or directory tree. A path that is already gone is not an error.
    fn remove_all(&self, path: &Path) -> crate::Result<()>;
}

/// Default filesystem implementation backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn entry_exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn rename(&self, from: &Path, to: &Path) -> crate::Result<()> {
        fs::rename(from, to).map_err(|err| CoreError::io(from, err))
    }

    fn copy_recursive(&self, from: &Path, to: &Path) -> crate::Result<()> {
        let meta = fs::symlink_metadata(from).map_err(|err| CoreError::io(from, err))?;
        if !meta.is_dir() {
            return copy_entry(from, to, &meta);
        }

        for entry in WalkDir::new(from).follow_links(false) {
            let entry = entry.map_err(|err| {
                let path = err.path().unwrap_or(from).to_path_buf();
                CoreError::io(path, io::Error::from(err))
            })?;
            let relative = entry
                .path()
                .strip_prefix(from)
                .map_err(|_| CoreError::invalid_path(entry.path().display().to_string()))?;
            let target = to.join(relative);
            let meta = entry.metadata().map_err(|err| {
                CoreError::io(entry.path(), io::Error::from(err))
            })?;
            copy_entry(entry.path(), &target, &meta)?;
        }
        Ok(())
    }

    fn remove_all(&self, path: &Path) -> crate::Result<()> {
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(CoreError::io(path, err)),
        };
        let removed = if meta.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        match removed {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(CoreError::io(path, err)),
            _ => Ok(()),
        }
    }
}

fn copy_entry(from: &Path, to: &Path, meta: &fs::Metadata) -> crate::Result<()> {
    let file_type = meta.file_type();
    if file_type.is_dir() {
        fs::create_dir(to).map_err(|err| CoreError::io(to, err))
    } else if file_type.is_symlink() {
        let link = fs::read_link(from).map_err(|err| CoreError::io(from, err))?;
        symlink(&link, to).map_err(|err| CoreError::io(to, err))
    } else {
        fs::copy(from, to)
            .map(|_| ())
            .map_err(|err| CoreError::io(from, err))
    }
}

#[cfg(unix)]
fn symlink(link: &Path, to: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(link, to)
}

#[cfg(not(unix))]
fn symlink(_link: &Path, _to: &Path) -> io::Result<()> {
    Err(io::Error::new(io::ErrorKind::Unsupported, "symlink copy is only supported on unix"))
}
