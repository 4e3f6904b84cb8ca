use miette::Result;

use hoist_ops::ops_pom;
use hoist_ops::ops_setup::current_dir;

pub fn exec(properties: &[String]) -> Result<()> {
    let xml = ops_pom::pom(&current_dir()?, properties)?;
    println!("{xml}");
    Ok(())
}
