//! Operation: show the merged property snapshot.

use std::path::Path;

use hoist_core::config;
use hoist_util::errors::HoistResult;
use hoist_util::progress::mask;

use crate::ops_setup;

pub fn env(project_dir: &Path, overrides: &[String], reveal: bool) -> HoistResult<()> {
    let loaded = ops_setup::load(project_dir, overrides)?;
    let props = &loaded.snapshot.properties;

    if props.is_empty() {
        println!("No properties configured.");
        println!("  user file: {}", config::user_properties_path().display());
        return Ok(());
    }

    println!("Properties ({} entries):", props.len());
    for (key, value, source) in props.iter() {
        println!("  {key} = {}  [{source}]", mask(value, reveal));
    }
    Ok(())
}
