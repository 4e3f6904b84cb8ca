use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::license::License;

/// Default Sonatype Nexus host used for Maven Central staging.
pub const DEFAULT_NEXUS_URL: &str = "https://s01.oss.sonatype.org";

/// Default repository key appended to the Artifactory context URL.
pub const DEFAULT_ARTIFACTORY_REPOSITORY_KEY: &str = "gradle";

/// The parsed representation of a `Hoist.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub package: PackageMetadata,

    #[serde(default)]
    pub publish: PublishConfig,
}

/// Package identity and metadata from the `[package]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Components applied to the project (e.g. `java-library`, `distribution`).
    #[serde(default)]
    pub plugins: Vec<String>,
}

fn default_version() -> String {
    "unspecified".to_string()
}

/// Publishing configuration from the `[publish]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishConfig {
    #[serde(default)]
    pub license: Option<License>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "repo-name")]
    pub repo_name: Option<String>,
    #[serde(default, rename = "scm-organization")]
    pub scm_organization: Option<String>,
    #[serde(default)]
    pub developer: Option<DeveloperConfig>,
    #[serde(default)]
    pub artifactory: Option<ArtifactoryConfig>,
    #[serde(default, rename = "maven-central")]
    pub maven_central: Option<MavenCentralConfig>,
}

/// POM developer entry from `[publish.developer]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeveloperConfig {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default, rename = "organization-url")]
    pub organization_url: Option<String>,
}

/// Internal Artifactory publishing from `[publish.artifactory]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactoryConfig {
    #[serde(default = "default_repository_key", rename = "repository-key")]
    pub repository_key: String,
}

impl Default for ArtifactoryConfig {
    fn default() -> Self {
        Self {
            repository_key: default_repository_key(),
        }
    }
}

fn default_repository_key() -> String {
    DEFAULT_ARTIFACTORY_REPOSITORY_KEY.to_string()
}

/// Maven Central publishing through Sonatype from `[publish.maven-central]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MavenCentralConfig {
    #[serde(default = "default_nexus_url", rename = "nexus-url")]
    pub nexus_url: String,
    #[serde(default, rename = "package-group")]
    pub package_group: Option<String>,
}

impl Default for MavenCentralConfig {
    fn default() -> Self {
        Self {
            nexus_url: default_nexus_url(),
            package_group: None,
        }
    }
}

fn default_nexus_url() -> String {
    DEFAULT_NEXUS_URL.to_string()
}

impl PublishConfig {
    /// Repository key for the Artifactory source, whether or not the section is present.
    pub fn artifactory_repository_key(&self) -> &str {
        self.artifactory
            .as_ref()
            .map(|a| a.repository_key.as_str())
            .unwrap_or(DEFAULT_ARTIFACTORY_REPOSITORY_KEY)
    }
}

impl Manifest {
    /// Load and parse a `Hoist.toml` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            hoist_util::errors::HoistError::Manifest {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;
        Self::from_str(&content)
    }

    /// Parse a `Hoist.toml` from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            hoist_util::errors::HoistError::Manifest {
                message: format!("Failed to parse Hoist.toml: {e}"),
            }
            .into()
        })
    }
}
