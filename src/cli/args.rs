//! Command line argument parsing
//!
//! This module handles CLI argument parsing with subcommands:
//! - `interactive`: run the schedule menu (also the default with no subcommand)
//! - `show-config`: show configuration discovery information

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug)]
pub enum ExecutionMode {
    Interactive(InteractiveConfig),
    ShowConfig,
}

#[derive(Debug, Default)]
pub struct InteractiveConfig {
    pub config_override: Option<PathBuf>,
    pub log_file_override: Option<PathBuf>,
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[command(name = "astroday")]
#[command(author = "Astroday Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Console organizer for an astronaut's daily schedule")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive schedule menu (default)
    Interactive {
        /// Configuration file path
        #[arg(short = 'c', long = "config")]
        config: Option<PathBuf>,
        /// Append schedule events to this log file
        #[arg(long = "log-file")]
        log_file: Option<PathBuf>,
        /// Enable verbose output
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },
    /// Show configuration discovery information
    ShowConfig,
}

impl Args {
    /// Map parsed arguments onto an execution mode. No subcommand means the
    /// interactive menu with defaults.
    pub fn execution_mode(self) -> ExecutionMode {
        match self.command {
            None => ExecutionMode::Interactive(InteractiveConfig::default()),
            Some(Commands::Interactive {
                config,
                log_file,
                verbose,
            }) => ExecutionMode::Interactive(InteractiveConfig {
                config_override: config,
                log_file_override: log_file,
                verbose,
            }),
            Some(Commands::ShowConfig) => ExecutionMode::ShowConfig,
        }
    }
}
