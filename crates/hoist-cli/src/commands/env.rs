use miette::Result;

use hoist_ops::ops_env;
use hoist_ops::ops_setup::current_dir;

pub fn exec(properties: &[String], reveal: bool) -> Result<()> {
    ops_env::env(&current_dir()?, properties, reveal)
}
