use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Get the configuration directory path for the application
pub fn get_config_dir() -> Option<PathBuf> {
    // Use "com" as qualifier for better cross-platform compatibility
    ProjectDirs::from("com", "todo-cli", "todo").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Expand `~` in a path string to the user's home directory
pub fn expand_path(path: &str) -> PathBuf {
    if path.starts_with("~/") {
        if let Some(home) = BaseDirs::new().map(|d| d.home_dir().to_path_buf()) {
            return home.join(&path[2..]);
        }
    }
    PathBuf::from(path)
}

/// Get the current local time as a `YYYY-MM-DD HH:MM:SS` string
pub fn timestamp_now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
