//! Layered `key=value` project properties.
//!
//! Values come from, lowest to highest precedence: the project's
//! `hoist.properties`, the user's `~/.hoist/hoist.properties`, environment
//! variables named `HOIST_PROJECT_<key>`, and `-P key=value` overrides.
//! The merged [`PropertySnapshot`] is read-only once built.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use hoist_util::errors::HoistError;
use serde::Serialize;

/// File name of both the project and the user properties file.
pub const PROPERTIES_FILE: &str = "hoist.properties";

/// Prefix that turns an environment variable into a project property.
pub const ENV_PROPERTY_PREFIX: &str = "HOIST_PROJECT_";

/// Where a property value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertySource {
    ProjectFile,
    UserFile,
    Environment,
    CommandLine,
}

impl fmt::Display for PropertySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PropertySource::ProjectFile => "project hoist.properties",
            PropertySource::UserFile => "user hoist.properties",
            PropertySource::Environment => "environment",
            PropertySource::CommandLine => "command line",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    value: String,
    source: PropertySource,
}

/// Merged, immutable view of all property layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySnapshot {
    entries: BTreeMap<String, Entry>,
}

impl PropertySnapshot {
    pub fn builder() -> PropertySnapshotBuilder {
        PropertySnapshotBuilder::default()
    }

    /// Value of a property. Blank values count as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .map(|e| e.value.as_str())
            .filter(|v| !v.trim().is_empty())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn source(&self, name: &str) -> Option<PropertySource> {
        self.entries.get(name).map(|e| e.source)
    }

    /// All entries as `(name, value, source)`, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, PropertySource)> {
        self.entries
            .iter()
            .map(|(k, e)| (k.as_str(), e.value.as_str(), e.source))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Accumulates property layers; later layers override earlier ones.
#[derive(Debug, Default)]
pub struct PropertySnapshotBuilder {
    entries: BTreeMap<String, Entry>,
}

impl PropertySnapshotBuilder {
    pub fn layer<I, K, V>(mut self, source: PropertySource, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in values {
            self.entries.insert(
                key.into(),
                Entry {
                    value: value.into(),
                    source,
                },
            );
        }
        self
    }

    pub fn build(self) -> PropertySnapshot {
        PropertySnapshot {
            entries: self.entries,
        }
    }
}

/// Load a properties file (`key=value` or `key: value` lines).
///
/// A missing file yields an empty map. Lines starting with `#` or `!` are
/// comments.
pub fn load_properties_file(path: &Path) -> miette::Result<BTreeMap<String, String>> {
    let Some(content) = hoist_util::fs::read_optional(path).map_err(HoistError::Io)? else {
        return Ok(BTreeMap::new());
    };
    Ok(parse_properties(&content))
}

/// Parse properties text. Lines without a separator are ignored.
pub fn parse_properties(content: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }
        let Some(idx) = trimmed.find(['=', ':']) else {
            continue;
        };
        let key = trimmed[..idx].trim();
        if key.is_empty() {
            continue;
        }
        map.insert(key.to_string(), trimmed[idx + 1..].trim().to_string());
    }
    map
}

/// Pick `HOIST_PROJECT_*` variables out of an environment listing, prefix stripped.
pub fn env_overrides<I>(vars: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    vars.into_iter()
        .filter_map(|(k, v)| {
            k.strip_prefix(ENV_PROPERTY_PREFIX)
                .filter(|name| !name.is_empty())
                .map(|name| (name.to_string(), v))
        })
        .collect()
}

/// Parse a `-P key=value` command-line override.
pub fn parse_override(raw: &str) -> Result<(String, String), HoistError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(HoistError::Properties {
            message: format!("invalid property override '{raw}', expected key=value"),
        }),
    }
}
