use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

use tempfile::tempdir;
use trash_put_core::prelude::*;

struct NothingInstalled;

impl CommandRunner for NothingInstalled {
    fn run(&self, _program: &Path, _args: &[&OsStr]) -> io::Result<Option<i32>> {
        Err(io::Error::new(io::ErrorKind::NotFound, "not installed"))
    }
}

#[test]
fn moves_files_and_directories_into_home_trash() {
    let temp = tempdir().unwrap();
    let home = temp.path().join("home");
    let trash = home.join(TRASH_DIR_NAME);
    let work = temp.path().join("work");
    fs::create_dir_all(&trash).unwrap();
    fs::create_dir_all(work.join("build/out")).unwrap();
    fs::write(work.join("build/out/app"), b"bin").unwrap();
    fs::write(work.join("notes.md"), b"# notes").unwrap();
    fs::write(trash.join("notes.md"), b"earlier").unwrap();

    let config = TrashConfig {
        home: Some(home.clone()),
        ..TrashConfig::default()
    };
    let cache = TrashCommandCache::new();
    let mover = TrashMover::new(RealFileSystem, NothingInstalled, config, &cache);

    let result = mover.move_paths(&["build", "notes.md", "gone.txt"], &work, false);

    assert_eq!(result.missing, vec!["gone.txt"]);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert!(!work.join("build").exists());
    assert!(!work.join("notes.md").exists());
    assert_eq!(fs::read(trash.join("build/out/app")).unwrap(), b"bin");
    assert_eq!(fs::read(trash.join("notes.md")).unwrap(), b"earlier");

    let renamed: Vec<String> = fs::read_dir(&trash)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("notes.md-"))
        .collect();
    assert_eq!(renamed.len(), 1);
    assert_eq!(fs::read(trash.join(&renamed[0])).unwrap(), b"# notes");
    assert_eq!(cache.get(), Some(None));
}

#[test]
fn unset_home_reports_one_error_and_keeps_files() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("keep.txt");
    fs::write(&file, b"k").unwrap();

    let cache = TrashCommandCache::new();
    let mover = TrashMover::new(RealFileSystem, NothingInstalled, TrashConfig::default(), &cache);
    let result = mover.move_paths(&[file.to_string_lossy()], temp.path(), false);

    assert_eq!(
        result,
        MoveResult {
            missing: Vec::new(),
            errors: vec![CoreError::TrashDirUnavailable.to_string()],
        }
    );
    assert!(file.exists());
}

#[test]
fn default_entry_point_returns_early_for_missing_inputs() {
    let temp = tempdir().unwrap();
    let result = move_paths_to_trash(&["a", "b/c"], temp.path(), false);
    assert_eq!(result.missing, vec!["a", "b/c"]);
    assert!(result.errors.is_empty());

    let result = move_paths_to_trash(&["a"], temp.path(), true);
    assert!(result.is_clean());
}
