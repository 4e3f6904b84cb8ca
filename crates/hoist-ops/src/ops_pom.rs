//! Operation: render the POM of the `javaLibrary` publication.

use std::path::Path;

use hoist_publish::publication::JAVA_LIBRARY_PUBLICATION;
use hoist_util::errors::{HoistError, HoistResult};

use crate::ops_setup;

pub fn pom(project_dir: &Path, overrides: &[String]) -> HoistResult<String> {
    let loaded = ops_setup::load(project_dir, overrides)?;
    let plan = ops_setup::finalize(&loaded.snapshot)?;

    let pom = plan
        .publication(JAVA_LIBRARY_PUBLICATION)
        .and_then(|p| p.pom.as_ref())
        .ok_or_else(|| HoistError::Generic {
            message: format!(
                "No {JAVA_LIBRARY_PUBLICATION} publication; apply the `java-library` plugin in [package].plugins"
            ),
        })?;
    Ok(pom.to_xml()?)
}
