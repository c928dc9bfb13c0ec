use std::path::PathBuf;

use crate::config::CONFIG_FILE_NAME;

pub const APP_DIR_NAME: &str = "career-assist";

/// Per-user config location.
/// Uses `dirs::config_dir()` + "career-assist" (e.g., %APPDATA%/career-assist or ~/.config/career-assist).
/// Nothing is created; the caller checks for existence.
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR_NAME))
}

pub fn user_config_file() -> Option<PathBuf> {
    user_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}
