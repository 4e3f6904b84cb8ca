use hoist_util::fs::{find_ancestor_with, read_optional};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_find_ancestor_with_walks_up() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Hoist.toml"), "").unwrap();
    let nested = tmp.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let found = find_ancestor_with(&nested, "Hoist.toml").unwrap();
    assert_eq!(found, tmp.path());
}

#[test]
fn test_find_ancestor_with_missing_returns_none() {
    let tmp = TempDir::new().unwrap();
    assert!(find_ancestor_with(tmp.path(), "definitely-not-here-42.toml").is_none());
}

#[test]
fn test_read_optional_missing_file() {
    let tmp = TempDir::new().unwrap();
    let content = read_optional(&tmp.path().join("nope")).unwrap();
    assert!(content.is_none());
}

#[test]
fn test_read_optional_existing_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("hoist.properties");
    fs::write(&path, "a=b\n").unwrap();
    assert_eq!(read_optional(&path).unwrap().as_deref(), Some("a=b\n"));
}
