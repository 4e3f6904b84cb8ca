use miette::Result;

use hoist_ops::ops_setup::current_dir;
use hoist_ops::ops_targets;

pub fn exec(properties: &[String], json: bool) -> Result<()> {
    ops_targets::targets(&current_dir()?, properties, json)
}
