use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use mirror_fs::io;

#[test]
fn test_replace_dir_creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("mirror");

    io::replace_dir(&dir).unwrap();

    assert!(dir.is_dir());
}

#[test]
fn test_replace_dir_removes_existing_contents() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("mirror");
    fs::create_dir_all(dir.join("nested")).unwrap();
    fs::write(dir.join("stale.json"), "{}").unwrap();
    fs::write(dir.join("nested/stale.xml"), "<xml/>").unwrap();

    io::replace_dir(&dir).unwrap();

    assert!(dir.is_dir());
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
}

#[test]
fn test_write_file_overwrites() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("file.json");
    fs::write(&path, "old").unwrap();

    io::write_file(&path, b"new").unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"new");
}

#[test]
fn test_write_file_missing_parent_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing/file.json");

    let result = io::write_file(&path, b"content");

    assert!(result.is_err());
}

#[test]
fn test_list_entry_names_sorted() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("b.json"), "").unwrap();
    fs::write(temp.path().join("a.json"), "").unwrap();
    fs::write(temp.path().join("c.json"), "").unwrap();

    let names = io::list_entry_names(temp.path()).unwrap();

    assert_eq!(names, vec!["a.json", "b.json", "c.json"]);
}

#[test]
fn test_list_entry_names_missing_dir_is_empty() {
    let temp = TempDir::new().unwrap();
    let names = io::list_entry_names(&temp.path().join("absent")).unwrap();
    assert!(names.is_empty());
}

#[cfg(unix)]
#[test]
fn test_create_symlink_and_broken_link_detection() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("real.json");
    fs::write(&target, "{}").unwrap();

    let good = temp.path().join("good.json");
    io::create_symlink(&target, &good).unwrap();
    assert!(!io::is_broken_link(&good));
    assert_eq!(fs::read(&good).unwrap(), b"{}");

    let bad = temp.path().join("bad.json");
    io::create_symlink(&temp.path().join("gone.json"), &bad).unwrap();
    assert!(io::is_broken_link(&bad));

    // A regular file is not a broken link.
    assert!(!io::is_broken_link(&target));
}
