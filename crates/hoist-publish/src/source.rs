//! Candidate sources of publish targets.
//!
//! Each source looks at its own inputs only. A source is active when its
//! URL-determining input is present; credentials are attached only when both
//! halves of its pair are present.

use std::fmt;

use hoist_core::snapshot::BuildSnapshot;

use crate::keys;
use crate::repository::{
    nexus_url, Credentials, PublishTarget, SONATYPE_SNAPSHOTS_PATH, SONATYPE_STAGING_DEPLOY_PATH,
};
use crate::version::is_snapshot;

/// Repository name under which Maven Central uploads are registered.
pub const MAVEN_CENTRAL_REPOSITORY: &str = "mavenCentral";

/// A configuration origin that yields at most one publish target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateSource {
    Artifactory,
    DirectMaven,
    SonatypeSnapshot,
    SonatypeRelease,
}

impl CandidateSource {
    /// All sources in evaluation priority order.
    pub const PRIORITY: [CandidateSource; 4] = [
        CandidateSource::Artifactory,
        CandidateSource::DirectMaven,
        CandidateSource::SonatypeSnapshot,
        CandidateSource::SonatypeRelease,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            CandidateSource::Artifactory => "artifactory",
            CandidateSource::DirectMaven => "direct-maven",
            CandidateSource::SonatypeSnapshot => "sonatype-snapshot",
            CandidateSource::SonatypeRelease => "sonatype-release",
        }
    }

    fn repository_name(&self) -> &'static str {
        match self {
            CandidateSource::Artifactory => "artifactory",
            CandidateSource::DirectMaven => "maven",
            CandidateSource::SonatypeSnapshot | CandidateSource::SonatypeRelease => {
                MAVEN_CENTRAL_REPOSITORY
            }
        }
    }

    /// Evaluate this source against the snapshot.
    pub fn evaluate(&self, snapshot: &BuildSnapshot) -> Option<PublishTarget> {
        let props = &snapshot.properties;
        let (url, credentials) = match self {
            CandidateSource::Artifactory => {
                let context = props.get(keys::ARTIFACTORY_CONTEXT_URL)?;
                let url = format!(
                    "{}/{}",
                    context.trim_end_matches('/'),
                    snapshot.publish.artifactory_repository_key()
                );
                let creds = Credentials::pair(
                    props.get(keys::ARTIFACTORY_USER),
                    props.get(keys::ARTIFACTORY_PASSWORD),
                );
                (url, creds)
            }
            CandidateSource::DirectMaven => {
                let url = props.get(keys::MAVEN_PUBLISH_URL)?.to_string();
                let creds = Credentials::pair(
                    props.get(keys::MAVEN_PUBLISH_USERNAME),
                    props.get(keys::MAVEN_PUBLISH_PASSWORD),
                );
                (url, creds)
            }
            CandidateSource::SonatypeSnapshot | CandidateSource::SonatypeRelease => {
                if !snapshot.uploads_to_maven_central() {
                    return None;
                }
                let central = snapshot.publish.maven_central.as_ref()?;
                let host = central.nexus_url.trim();
                if host.is_empty() {
                    return None;
                }
                let snapshot_version = is_snapshot(&snapshot.project.version);
                let path = match (self, snapshot_version) {
                    (CandidateSource::SonatypeSnapshot, true) => SONATYPE_SNAPSHOTS_PATH,
                    (CandidateSource::SonatypeRelease, false) => SONATYPE_STAGING_DEPLOY_PATH,
                    _ => return None,
                };
                let creds = Credentials::pair(
                    props.get(keys::OSSRH_USERNAME),
                    props.get(keys::OSSRH_PASSWORD),
                );
                (nexus_url(host, path), creds)
            }
        };

        Some(PublishTarget {
            name: self.repository_name().to_string(),
            url,
            credentials,
        })
    }
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
