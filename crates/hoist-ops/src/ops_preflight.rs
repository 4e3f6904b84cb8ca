//! Operation: run the preflight of a single task.

use std::path::Path;

use hoist_util::errors::HoistResult;
use hoist_util::progress;

use crate::ops_setup;

pub fn preflight(project_dir: &Path, overrides: &[String], task: &str) -> HoistResult<()> {
    let loaded = ops_setup::load(project_dir, overrides)?;
    let plan = ops_setup::finalize(&loaded.snapshot)?;

    plan.before_task(task)?;

    progress::status("Ready", task);
    if task == hoist_publish::tasks::PUBLISH {
        if plan.targets.is_empty() {
            progress::status_warn("Warning", "no publish targets are active");
        }
        for target in &plan.targets.targets {
            println!("{} -> {}", target.name, target.url);
        }
    }
    Ok(())
}
