//! Sonatype Nexus staging configuration (close/release of staged uploads).

use hoist_core::snapshot::BuildSnapshot;
use serde::Serialize;

use crate::keys;
use crate::repository::{nexus_url, Credentials, SONATYPE_STAGING_API_PATH};
use crate::structural::package_group;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagingConfig {
    pub server_url: String,
    pub credentials: Option<Credentials>,
    pub package_group: String,
}

impl StagingConfig {
    /// `None` unless Maven Central uploads are wired with a Nexus host and a
    /// derivable package group.
    pub fn from_snapshot(snapshot: &BuildSnapshot) -> Option<Self> {
        if !snapshot.uploads_to_maven_central() {
            return None;
        }
        let central = snapshot.publish.maven_central.as_ref()?;
        if central.nexus_url.trim().is_empty() {
            return None;
        }
        let props = &snapshot.properties;
        Some(Self {
            server_url: nexus_url(&central.nexus_url, SONATYPE_STAGING_API_PATH),
            credentials: Credentials::pair(
                props.get(keys::OSSRH_USERNAME),
                props.get(keys::OSSRH_PASSWORD),
            ),
            package_group: package_group(snapshot)?.to_string(),
        })
    }
}
