//! Registry of components applied to the project.
//!
//! Publishing attaches behaviour depending on what else the project applies
//! (a Java library, a plugin-development component, a distribution). Those
//! are declared in `[package].plugins` and queried here by name.

use std::collections::BTreeSet;

pub const JAVA_LIBRARY: &str = "java-library";
pub const JAVA_GRADLE_PLUGIN: &str = "java-gradle-plugin";
pub const DISTRIBUTION: &str = "distribution";

/// Set of applied component identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Components {
    applied: BTreeSet<String>,
}

impl Components {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            applied: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has(&self, id: &str) -> bool {
        self.applied.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.applied.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}
