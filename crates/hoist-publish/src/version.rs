/// Suffix marking a non-release build.
pub const SNAPSHOT_SUFFIX: &str = "SNAPSHOT";

/// Whether `version` is a snapshot.
///
/// Exact, case-sensitive tail match on [`SNAPSHOT_SUFFIX`]; no semantic
/// version parsing.
pub fn is_snapshot(version: &str) -> bool {
    version.ends_with(SNAPSHOT_SUFFIX)
}
