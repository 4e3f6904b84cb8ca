use miette::Result;

use hoist_ops::ops_preflight;
use hoist_ops::ops_setup::current_dir;

pub fn exec(properties: &[String], task: &str) -> Result<()> {
    ops_preflight::preflight(&current_dir()?, properties, task)
}
