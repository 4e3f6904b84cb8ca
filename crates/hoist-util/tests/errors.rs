use hoist_util::errors::{HoistError, HoistResult};

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = HoistError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_manifest_error_display() {
    let err = HoistError::Manifest {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Manifest error: bad syntax");
}

#[test]
fn test_structural_error_display_is_message() {
    let err = HoistError::Structural {
        field: "license".to_string(),
        message: "A license type must be specified".to_string(),
    };
    assert_eq!(err.to_string(), "A license type must be specified");
}

#[test]
fn test_missing_property_names_property_task_and_remedies() {
    let err = HoistError::MissingProperty {
        property: "ossrhUsername".to_string(),
        task: "publish".to_string(),
        file: "~/.hoist/hoist.properties".to_string(),
        prefix: "HOIST_PROJECT_".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("Missing expected property: ossrhUsername"), "got: {msg}");
    assert!(msg.contains("task `publish`"), "got: {msg}");
    assert!(msg.contains("~/.hoist/hoist.properties"), "got: {msg}");
    assert!(msg.contains("HOIST_PROJECT_ossrhUsername"), "got: {msg}");
}

#[test]
fn test_unknown_task_display() {
    let err = HoistError::UnknownTask {
        task: "deploy".to_string(),
    };
    assert_eq!(err.to_string(), "Unknown task 'deploy'");
}

#[test]
fn test_generic_error_display() {
    let err = HoistError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_error_converts_into_hoist_result() {
    fn unknown() -> HoistResult<()> {
        Err::<(), _>(HoistError::UnknownTask {
            task: "publishAll".to_string(),
        })?;
        Ok(())
    }
    let report = unknown().unwrap_err();
    assert_eq!(report.to_string(), "Unknown task 'publishAll'");
}
