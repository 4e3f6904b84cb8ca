//! Eager checks run once configuration is finalized.

use hoist_core::snapshot::BuildSnapshot;
use hoist_util::errors::HoistError;

/// Fail when a field that shapes the whole publication is unset.
///
/// The license is always required. Maven Central additionally needs the
/// repository name (SCM URLs are derived from it), a Nexus host and a staging
/// package group.
pub fn check(snapshot: &BuildSnapshot) -> Result<(), HoistError> {
    if snapshot.publish.license.is_none() {
        return Err(structural(
            "license",
            "A license type must be specified in Hoist.toml to publish",
        ));
    }
    if snapshot.publishes_to_maven_central() {
        if is_blank(snapshot.publish.repo_name.as_deref()) {
            return Err(structural(
                "repo-name",
                "Repository name must be specified in Hoist.toml to publish to Maven Central",
            ));
        }
        let nexus = snapshot.publish.maven_central.as_ref().map(|c| c.nexus_url.as_str());
        if is_blank(nexus) {
            return Err(structural(
                "maven-central.nexus-url",
                "A Nexus host must be set in Hoist.toml to publish to Maven Central",
            ));
        }
        if package_group(snapshot).is_none() {
            return Err(structural(
                "maven-central.package-group",
                "A staging package group must be specified in Hoist.toml \
                 (or a [package] group set) to publish to Maven Central",
            ));
        }
    }
    Ok(())
}

/// Staging package group: the explicit setting, else the project group.
pub fn package_group(snapshot: &BuildSnapshot) -> Option<&str> {
    snapshot
        .publish
        .maven_central
        .as_ref()
        .and_then(|c| c.package_group.as_deref())
        .filter(|g| !g.trim().is_empty())
        .or_else(|| {
            snapshot
                .project
                .group
                .as_deref()
                .filter(|g| !g.trim().is_empty())
        })
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn structural(field: &str, message: &str) -> HoistError {
    HoistError::Structural {
        field: field.to_string(),
        message: message.to_string(),
    }
}
