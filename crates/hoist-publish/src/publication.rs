//! Publications derived from the applied components.

use hoist_core::components::{Components, DISTRIBUTION, JAVA_GRADLE_PLUGIN, JAVA_LIBRARY};
use serde::Serialize;

use crate::pom::PomMetadata;

pub const JAVA_LIBRARY_PUBLICATION: &str = "javaLibrary";
pub const DISTRIBUTION_PUBLICATION: &str = "distributionZip";

/// What a publication's primary artifact is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "kebab-case")]
pub enum PublicationSource {
    /// A software component (`java`).
    Component(String),
    /// The output of a task (`distZip`).
    TaskOutput(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publication {
    pub name: String,
    pub source: PublicationSource,
    /// Extra jars published next to the main artifact (`javadoc`, `sources`).
    pub classifiers: Vec<String>,
    pub pom: Option<PomMetadata>,
}

/// Whether a `javaLibrary` publication will be created for these components.
///
/// `java-gradle-plugin` publishes its own component, so a plain library
/// setup stays out of its way; Maven Central reuses the publication instead.
pub fn has_java_library(components: &Components, maven_central: bool) -> bool {
    components.has(JAVA_LIBRARY) && (maven_central || !components.has(JAVA_GRADLE_PLUGIN))
}

pub fn plan(components: &Components, maven_central: bool, pom: &PomMetadata) -> Vec<Publication> {
    let mut publications = Vec::new();

    if has_java_library(components, maven_central) {
        let classifiers = if maven_central {
            vec!["javadoc".to_string(), "sources".to_string()]
        } else {
            Vec::new()
        };
        publications.push(Publication {
            name: JAVA_LIBRARY_PUBLICATION.to_string(),
            source: PublicationSource::Component("java".to_string()),
            classifiers,
            pom: Some(pom.clone()),
        });
    }

    if components.has(DISTRIBUTION) {
        publications.push(Publication {
            name: DISTRIBUTION_PUBLICATION.to_string(),
            source: PublicationSource::TaskOutput("distZip".to_string()),
            classifiers: Vec::new(),
            pom: None,
        });
    }

    publications
}
