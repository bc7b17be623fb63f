//! Environment constants and path utilities for the schedule organizer.
//!
//! This module centralizes the hardcoded file and directory names used
//! throughout the application, making them easier to maintain and modify.

use std::path::{Path, PathBuf};

/// Main application directory name (hidden directory like .git, .vscode)
pub const APP_DIR_NAME: &str = ".astroday";

/// Configuration file name inside the application directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Bare configuration file name checked in the working directory
pub const LOCAL_CONFIG_FILE_NAME: &str = "astroday.toml";

/// Default file name for the append-only schedule log
pub const DEFAULT_LOG_FILE_NAME: &str = "astroday.log";

/// Build the local config file path in the given working directory
pub fn local_config_file_path(current_dir: &Path) -> PathBuf {
    current_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Build the config directory path in the user's home directory
pub fn user_config_dir_path(home_dir: &Path) -> PathBuf {
    home_dir.join(APP_DIR_NAME)
}

/// Build the config file path in the user's home directory
pub fn user_config_file_path(home_dir: &Path) -> PathBuf {
    user_config_dir_path(home_dir).join(CONFIG_FILE_NAME)
}

/// Build the default log file path relative to the given base directory
pub fn default_log_file_path(base_dir: &Path) -> PathBuf {
    base_dir.join(DEFAULT_LOG_FILE_NAME)
}
