//! Publish destinations: URL plus optional credentials.

use std::fmt;

use serde::Serialize;

/// Path under the Nexus host that receives snapshot uploads.
pub const SONATYPE_SNAPSHOTS_PATH: &str = "/content/repositories/snapshots/";

/// Path under the Nexus host that receives release uploads into staging.
pub const SONATYPE_STAGING_DEPLOY_PATH: &str = "/service/local/staging/deploy/maven2/";

/// Path under the Nexus host serving the staging REST API.
pub const SONATYPE_STAGING_API_PATH: &str = "/service/local/";

/// Username/password pair for a repository.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Pair up a username and password; both must be present.
    pub fn pair(username: Option<&str>, password: Option<&str>) -> Option<Self> {
        match (username, password) {
            (Some(user), Some(pass)) => Some(Self::new(user, pass)),
            _ => None,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// A repository artifacts will be uploaded to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishTarget {
    /// Repository name as registered for publishing (e.g. `mavenCentral`).
    pub name: String,
    pub url: String,
    pub credentials: Option<Credentials>,
}

impl PublishTarget {
    /// Whether uploads to this target authenticate.
    pub fn has_auth(&self) -> bool {
        self.credentials.is_some()
    }
}

/// Join a Nexus host with one of the `SONATYPE_*` paths.
pub fn nexus_url(host: &str, path: &str) -> String {
    format!("{}{}", host.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_masks_password() {
        let creds = Credentials::new("deploy", "hunter2");
        let out = format!("{creds:?}");
        assert!(out.contains("deploy"));
        assert!(!out.contains("hunter2"));
    }

    #[test]
    fn pair_requires_both_halves() {
        assert!(Credentials::pair(Some("u"), Some("p")).is_some());
        assert!(Credentials::pair(Some("u"), None).is_none());
        assert!(Credentials::pair(None, Some("p")).is_none());
    }

    #[test]
    fn nexus_url_trims_trailing_slash() {
        assert_eq!(
            nexus_url("https://s01.oss.sonatype.org/", SONATYPE_SNAPSHOTS_PATH),
            "https://s01.oss.sonatype.org/content/repositories/snapshots/"
        );
    }
}
