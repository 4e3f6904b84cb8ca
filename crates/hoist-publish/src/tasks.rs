//! Names of the tasks publishing registers.

/// Lifecycle task that uploads every publication to every target.
pub const PUBLISH: &str = "publish";

/// Writes the POM of the `javaLibrary` publication.
pub const GENERATE_POM: &str = "generatePomFileForJavaLibraryPublication";

pub const CLOSE_REPOSITORY: &str = "closeRepository";
pub const RELEASE_REPOSITORY: &str = "releaseRepository";
pub const CLOSE_AND_RELEASE_REPOSITORY: &str = "closeAndReleaseRepository";
pub const GET_STAGING_PROFILE: &str = "getStagingProfile";

/// Sonatype staging tasks, registered with Maven Central publishing.
pub const STAGING_TASKS: [&str; 4] = [
    CLOSE_REPOSITORY,
    RELEASE_REPOSITORY,
    CLOSE_AND_RELEASE_REPOSITORY,
    GET_STAGING_PROFILE,
];
