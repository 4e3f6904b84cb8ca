//! Names of the properties publishing reads.

pub const ARTIFACTORY_CONTEXT_URL: &str = "artifactory_contextUrl";
pub const ARTIFACTORY_USER: &str = "artifactory_user";
pub const ARTIFACTORY_PASSWORD: &str = "artifactory_password";

pub const MAVEN_PUBLISH_URL: &str = "mavenPublishUrl";
pub const MAVEN_PUBLISH_USERNAME: &str = "mavenPublishUsername";
pub const MAVEN_PUBLISH_PASSWORD: &str = "mavenPublishPassword";

pub const OSSRH_USERNAME: &str = "ossrhUsername";
pub const OSSRH_PASSWORD: &str = "ossrhPassword";

pub const SIGNING_KEY_ID: &str = "signingKeyId";
pub const SIGNING_KEY: &str = "signingKey";
pub const SIGNING_PASSWORD: &str = "signingPassword";
