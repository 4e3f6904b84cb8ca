use crate::components::{Components, JAVA_LIBRARY};
use crate::manifest::{Manifest, PublishConfig};
use crate::properties::PropertySnapshot;

/// Project identity as seen by publishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub name: String,
    pub group: Option<String>,
    pub version: String,
    pub description: Option<String>,
}

/// Everything one invocation knows about the project, fixed once built.
///
/// Constructed after the manifest and every property layer are loaded and
/// passed by reference to all consumers.
#[derive(Debug, Clone)]
pub struct BuildSnapshot {
    pub project: ProjectInfo,
    pub publish: PublishConfig,
    pub properties: PropertySnapshot,
    pub components: Components,
}

impl BuildSnapshot {
    pub fn new(manifest: Manifest, properties: PropertySnapshot) -> Self {
        let package = manifest.package;
        Self {
            components: Components::new(package.plugins),
            project: ProjectInfo {
                name: package.name,
                group: package.group,
                version: package.version,
                description: package.description,
            },
            publish: manifest.publish,
            properties,
        }
    }

    /// Whether Maven Central publishing is configured.
    pub fn publishes_to_maven_central(&self) -> bool {
        self.publish.maven_central.is_some()
    }

    /// Whether Sonatype uploads and staging are wired. They only attach to a
    /// Java library.
    pub fn uploads_to_maven_central(&self) -> bool {
        self.publishes_to_maven_central() && self.components.has(JAVA_LIBRARY)
    }
}
