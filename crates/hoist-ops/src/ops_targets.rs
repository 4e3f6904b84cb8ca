//! Operation: list the active publish targets.

use std::path::Path;

use hoist_publish::resolver::resolve;
use hoist_util::errors::{HoistError, HoistResult};
use hoist_util::progress;

use crate::ops_setup;

pub fn targets(project_dir: &Path, overrides: &[String], json: bool) -> HoistResult<()> {
    let loaded = ops_setup::load(project_dir, overrides)?;
    let snapshot = &loaded.snapshot;
    let result = resolve(snapshot);

    if json {
        let out = serde_json::to_string_pretty(&result).map_err(|e| HoistError::Generic {
            message: format!("Failed to serialize targets: {e}"),
        })?;
        println!("{out}");
        return Ok(());
    }

    progress::status(
        "Resolving",
        &format!("{} v{}", snapshot.project.name, snapshot.project.version),
    );
    if result.is_empty() {
        println!("No publish targets configured.");
        return Ok(());
    }
    for target in &result.targets {
        let auth = match &target.credentials {
            Some(creds) => format!("{} / ********", creds.username),
            None => "anonymous".to_string(),
        };
        println!("{:<14} {}  ({auth})", target.name, target.url);
    }
    Ok(())
}
