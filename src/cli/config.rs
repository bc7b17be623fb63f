//! Configuration discovery and loading
//!
//! This module handles the configuration discovery hierarchy:
//! 1. Current directory: ./astroday.toml or ./.astroday/config.toml
//! 2. User config: ~/.astroday/config.toml
//! 3. System config: /etc/astroday/config.toml
//! 4. Built-in defaults

use crate::env;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env as std_env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultConfig {
    /// Where the append-only schedule log is written. Unset disables the
    /// file log; events still go to stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Tracing filter directive, e.g. "astroday=info"
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Print conflict notifications to the console
    #[serde(default = "default_console_conflicts")]
    pub console_conflicts: bool,
}

fn default_log_level() -> String {
    "astroday=info".to_string()
}

fn default_console_conflicts() -> bool {
    true
}

impl Default for DefaultConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            log_level: default_log_level(),
            console_conflicts: default_console_conflicts(),
        }
    }
}

impl DefaultConfig {
    /// Load from TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: DefaultConfig = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Save to TOML file
    pub fn to_toml_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).context("serializing config")?;
        fs::write(path, content)
            .with_context(|| format!("writing config file {}", path.display()))?;
        Ok(())
    }
}

/// Configuration discovery system
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover and load configuration using the hierarchy
    pub fn discover_config() -> Result<DefaultConfig> {
        if let Some(config_path) = Self::find_config_file() {
            info!("loading configuration from {:?}", config_path);
            return DefaultConfig::from_toml_file(config_path);
        }

        info!("no configuration file found, using defaults");
        Ok(DefaultConfig::default())
    }

    /// Find configuration file using discovery hierarchy
    pub fn find_config_file() -> Option<PathBuf> {
        let candidates = Self::get_config_candidates();

        for candidate in candidates {
            debug!("checking for config file: {:?}", candidate);
            if candidate.exists() && candidate.is_file() {
                debug!("found config file: {:?}", candidate);
                return Some(candidate);
            }
        }

        debug!("no config file found in discovery hierarchy");
        None
    }

    /// Get list of configuration file candidates in priority order
    pub fn get_config_candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        // 1. Current directory: ./astroday.toml or ./.astroday/config.toml
        if let Ok(current_dir) = std_env::current_dir() {
            candidates.push(current_dir.join(env::LOCAL_CONFIG_FILE_NAME));
            candidates.push(env::local_config_file_path(&current_dir));
        }

        // 2. User config: ~/.astroday/config.toml
        if let Some(home_dir) = Self::get_home_dir() {
            candidates.push(env::user_config_file_path(&home_dir));
        }

        // 3. System config: /etc/astroday/config.toml (Unix-like systems)
        #[cfg(unix)]
        candidates.push(PathBuf::from("/etc/astroday/config.toml"));

        // Windows system config: C:\ProgramData\astroday\config.toml
        #[cfg(windows)]
        if let Ok(program_data) = std_env::var("PROGRAMDATA") {
            candidates.push(
                PathBuf::from(program_data)
                    .join("astroday")
                    .join("config.toml"),
            );
        }

        candidates
    }

    /// Get home directory path
    fn get_home_dir() -> Option<PathBuf> {
        std_env::var("HOME")
            .ok()
            .or_else(|| std_env::var("USERPROFILE").ok())
            .map(PathBuf::from)
    }

    /// Show configuration discovery information for debugging
    pub fn show_discovery_info() {
        println!("Configuration Discovery Hierarchy:");
        println!();

        let candidates = Self::get_config_candidates();
        for (i, candidate) in candidates.iter().enumerate() {
            let status = if candidate.exists() {
                if candidate.is_file() {
                    "EXISTS"
                } else {
                    "NOT A FILE"
                }
            } else {
                "NOT FOUND"
            };

            println!("  {}. {:?} - {}", i + 1, candidate, status);
        }

        println!();
        if let Some(found) = Self::find_config_file() {
            println!("Active configuration: {:?}", found);
        } else {
            println!("Active configuration: Built-in defaults");
        }
    }
}
