//! Operation: finalize the publish configuration and summarize the plan.
//!
//! Structural problems fail the command. Tasks that are merely missing
//! properties are reported as warnings, since only running them would fail.

use std::path::Path;

use hoist_util::errors::HoistResult;
use hoist_util::progress;

use crate::ops_setup;

pub fn check(project_dir: &Path, overrides: &[String]) -> HoistResult<()> {
    let loaded = ops_setup::load(project_dir, overrides)?;
    let snapshot = &loaded.snapshot;
    progress::status(
        "Checking",
        &format!("{} v{}", snapshot.project.name, snapshot.project.version),
    );

    let plan = ops_setup::finalize(snapshot)?;

    println!("Targets:");
    if plan.targets.is_empty() {
        println!("  (none)");
    }
    for target in &plan.targets.targets {
        println!("  {} -> {}", target.name, target.url);
    }

    println!("Publications:");
    if plan.publications.is_empty() {
        println!("  (none)");
    }
    for publication in &plan.publications {
        if publication.classifiers.is_empty() {
            println!("  {}", publication.name);
        } else {
            println!(
                "  {} (+{})",
                publication.name,
                publication.classifiers.join(", ")
            );
        }
    }

    if let Some(signing) = &plan.signing {
        println!("Signing: {} with {}", signing.publication, signing.setup.describe());
    }
    if let Some(staging) = &plan.staging {
        println!(
            "Staging: {} (package group {})",
            staging.server_url, staging.package_group
        );
    }

    println!("Tasks:");
    for task in plan.tasks() {
        println!("  {task}");
    }

    for (task, missing) in plan.blocked_tasks() {
        let names: Vec<&str> = missing.iter().map(|r| r.property.as_str()).collect();
        progress::status_warn(
            "Warning",
            &format!("task `{task}` is missing properties: {}", names.join(", ")),
        );
    }

    progress::status("Finished", "publish configuration is valid");
    Ok(())
}
