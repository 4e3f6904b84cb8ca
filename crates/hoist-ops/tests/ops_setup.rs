use hoist_core::properties::PropertySource;
use hoist_ops::ops_setup::{finalize, load};
use std::fs;
use tempfile::TempDir;

fn isolate_home() {
    std::env::set_var("HOIST_HOME", "/nonexistent/hoist-home");
}

fn project(manifest: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Hoist.toml"), manifest).unwrap();
    tmp
}

const MANIFEST: &str = r#"
[package]
name = "lib"
version = "1.0.0"
plugins = ["java-library"]

[publish]
license = "APACHE_2_0"
"#;

#[test]
fn test_load_without_manifest_fails() {
    isolate_home();
    let tmp = TempDir::new().unwrap();
    let err = load(tmp.path(), &[]).err().unwrap();
    assert!(err.to_string().contains("Could not find Hoist.toml"), "got: {err}");
}

#[test]
fn test_load_from_nested_directory() {
    isolate_home();
    let tmp = project(MANIFEST);
    let nested = tmp.path().join("src").join("main");
    fs::create_dir_all(&nested).unwrap();

    let loaded = load(&nested, &[]).unwrap();
    assert_eq!(loaded.root, tmp.path());
    assert_eq!(loaded.snapshot.project.name, "lib");
}

#[test]
fn test_command_line_overrides_project_file() {
    isolate_home();
    let tmp = project(MANIFEST);
    fs::write(
        tmp.path().join("hoist.properties"),
        "mavenPublishUrl=https://file.example.com\nmavenPublishUsername=file-user\n",
    )
    .unwrap();

    let loaded = load(
        tmp.path(),
        &["mavenPublishUrl=https://cli.example.com".to_string()],
    )
    .unwrap();
    let props = &loaded.snapshot.properties;
    assert_eq!(props.get("mavenPublishUrl"), Some("https://cli.example.com"));
    assert_eq!(props.source("mavenPublishUrl"), Some(PropertySource::CommandLine));
    assert_eq!(props.get("mavenPublishUsername"), Some("file-user"));
    assert_eq!(props.source("mavenPublishUsername"), Some(PropertySource::ProjectFile));
}

#[test]
fn test_invalid_override_fails() {
    isolate_home();
    let tmp = project(MANIFEST);
    let err = load(tmp.path(), &["novalue".to_string()]).err().unwrap();
    assert!(err.to_string().contains("expected key=value"), "got: {err}");
}

#[test]
fn test_finalize_reports_structural_error() {
    isolate_home();
    let tmp = project("[package]\nname = \"lib\"\n");
    let loaded = load(tmp.path(), &[]).unwrap();
    let err = finalize(&loaded.snapshot).err().unwrap();
    assert!(err.to_string().contains("license"), "got: {err}");
}
