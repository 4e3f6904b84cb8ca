//! Loading the build snapshot shared by every command.
//!
//! [`load`] finds `Hoist.toml`, reads it, merges the property layers and
//! returns the immutable [`BuildSnapshot`]. [`finalize`] then runs the
//! publish plugin's two phases against it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use hoist_core::config;
use hoist_core::manifest::Manifest;
use hoist_core::properties::{
    self, env_overrides, load_properties_file, parse_override, PropertySnapshot, PropertySource,
};
use hoist_core::snapshot::BuildSnapshot;
use hoist_core::MANIFEST_FILE;
use hoist_publish::plugin::{FinalizedPlan, PublishPlugin};
use hoist_util::errors::{HoistError, HoistResult};
use hoist_util::fs::find_ancestor_with;
use tracing::debug;

/// A loaded project.
pub struct Loaded {
    pub root: PathBuf,
    pub snapshot: BuildSnapshot,
}

/// Load the project containing `start`.
///
/// `overrides` are raw `-P key=value` arguments; they take precedence over
/// every other property layer.
pub fn load(start: &Path, overrides: &[String]) -> HoistResult<Loaded> {
    let root = find_ancestor_with(start, MANIFEST_FILE).ok_or_else(|| HoistError::Manifest {
        message: format!("Could not find {MANIFEST_FILE} in this directory or any parent"),
    })?;
    let manifest = Manifest::from_path(&root.join(MANIFEST_FILE))?;

    let project_props = load_properties_file(&root.join(properties::PROPERTIES_FILE))?;
    let user_path = config::user_properties_path();
    let user_props = load_properties_file(&user_path)?;
    let env_props = env_overrides(std::env::vars());
    let cli_props = overrides
        .iter()
        .map(|raw| parse_override(raw))
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    debug!(
        root = %root.display(),
        user_file = %user_path.display(),
        project = project_props.len(),
        user = user_props.len(),
        env = env_props.len(),
        cli = cli_props.len(),
        "property layers loaded"
    );

    let props = PropertySnapshot::builder()
        .layer(PropertySource::ProjectFile, project_props)
        .layer(PropertySource::UserFile, user_props)
        .layer(PropertySource::Environment, env_props)
        .layer(PropertySource::CommandLine, cli_props)
        .build();

    Ok(Loaded {
        root,
        snapshot: BuildSnapshot::new(manifest, props),
    })
}

/// Configure and finalize the publish plugin for a loaded snapshot.
pub fn finalize(snapshot: &BuildSnapshot) -> HoistResult<FinalizedPlan> {
    let configured = PublishPlugin::configure(&snapshot.publish, &snapshot.components);
    Ok(configured.finalize(snapshot)?)
}

/// Current working directory as a hoist error.
pub fn current_dir() -> HoistResult<PathBuf> {
    Ok(std::env::current_dir().map_err(HoistError::Io)?)
}
