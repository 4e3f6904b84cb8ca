use miette::Result;

use hoist_ops::ops_check;
use hoist_ops::ops_setup::current_dir;

pub fn exec(properties: &[String]) -> Result<()> {
    ops_check::check(&current_dir()?, properties)
}
