use std::path::{Path, PathBuf};

/// Environment variable that relocates the hoist home directory.
pub const HOIST_HOME_ENV: &str = "HOIST_HOME";

/// User-level properties file as shown in diagnostics.
pub const USER_PROPERTIES_DISPLAY: &str = "~/.hoist/hoist.properties";

/// Returns the hoist home directory: `$HOIST_HOME`, else `~/.hoist/`.
pub fn dirs_path() -> PathBuf {
    home_from(
        std::env::var(HOIST_HOME_ENV).ok(),
        std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok(),
    )
}

/// Path of the user-level `hoist.properties`.
pub fn user_properties_path() -> PathBuf {
    dirs_path().join(crate::properties::PROPERTIES_FILE)
}

fn home_from(hoist_home: Option<String>, user_home: Option<String>) -> PathBuf {
    match hoist_home.filter(|h| !h.trim().is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => Path::new(&user_home.unwrap_or_else(|| ".".to_string())).join(".hoist"),
    }
}
