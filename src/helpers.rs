//! Path and naming helpers used while relocating items into the Trash.

use chrono::{DateTime, Utc};
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

/// Name used when a path has no final component (e.g. `/`).
pub const FALLBACK_BASENAME: &str = "item";

/// Returns a user-safe, trimmed path string that can be used in logs and messages.
pub fn sanitize_user_path(path: &Path) -> String {
    path.display().to_string().trim().to_string()
}

/// Resolves `input` against `base_dir` unless it is already absolute.
///
/// Relative results are normalized lexically (`.` dropped, `..` pops a
/// component) without touching the filesystem. A relative `base_dir` is
/// itself taken relative to the current working directory.
pub fn resolve_path(base_dir: &Path, input: &str) -> PathBuf {
    let input = Path::new(input);
    if input.is_absolute() {
        return input.to_path_buf();
    }

    let base = if base_dir.is_absolute() {
        base_dir.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(base_dir))
            .unwrap_or_else(|_| base_dir.to_path_buf())
    };
    normalize_lexically(&base.join(input))
}

/// Collapses `.` and `..` components without resolving symlinks.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Final path component as a string, or [`FALLBACK_BASENAME`].
pub fn trash_basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_BASENAME.to_string())
}

/// Builds the collision-avoiding name for the `attempt`-th retry.
///
/// Attempt 0 is `<base>-<timestamp>`, later attempts append `-<attempt>`.
pub fn build_unique_basename(base: &str, timestamp_millis: i64, attempt: u32) -> String {
    if attempt == 0 {
        format!("{base}-{timestamp_millis}")
    } else {
        format!("{base}-{timestamp_millis}-{attempt}")
    }
}

/// Milliseconds since the Unix epoch.
pub fn unix_millis(time: SystemTime) -> i64 {
    DateTime::<Utc>::from(time).timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn absolute_input_passes_through_untouched() {
        let resolved = resolve_path(Path::new("/base"), "/abs/./x/../y");
        assert_eq!(resolved, PathBuf::from("/abs/./x/../y"));
    }

    #[test]
    fn relative_input_is_joined_and_normalized() {
        assert_eq!(
            resolve_path(Path::new("/work/project"), "./src/../Cargo.toml"),
            PathBuf::from("/work/project/Cargo.toml")
        );
        assert_eq!(
            resolve_path(Path::new("/work/project"), "../../../etc"),
            PathBuf::from("/etc")
        );
    }

    #[test]
    fn relative_base_dir_uses_current_directory() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_path(Path::new("sub"), "file"), cwd.join("sub").join("file"));
    }

    #[test]
    fn basename_falls_back_for_root() {
        assert_eq!(trash_basename(Path::new("/tmp/report.pdf")), "report.pdf");
        assert_eq!(trash_basename(Path::new("/")), FALLBACK_BASENAME);
    }

    #[test]
    fn unique_basename_sequence() {
        assert_eq!(build_unique_basename("a.txt", 1700, 0), "a.txt-1700");
        assert_eq!(build_unique_basename("a.txt", 1700, 1), "a.txt-1700-1");
        assert_eq!(build_unique_basename("a.txt", 1700, 12), "a.txt-1700-12");
    }

    #[test]
    fn unix_millis_from_system_time() {
        let time = UNIX_EPOCH + Duration::from_millis(1_234_567);
        assert_eq!(unix_millis(time), 1_234_567);
    }
}
