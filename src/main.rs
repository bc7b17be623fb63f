use anyhow::Result;
use astroday::cli::{Args, ConfigDiscovery, DefaultConfig, ExecutionMode, InteractiveConfig, menu};
use astroday::logging::setup_logging;
use astroday::schedule::{ConsoleSink, TaskStore};
use clap::Parser;
use std::io;
use tracing::info;

fn main() -> Result<()> {
    let args = Args::parse();

    match args.execution_mode() {
        ExecutionMode::Interactive(config) => run_interactive(config),
        ExecutionMode::ShowConfig => {
            ConfigDiscovery::show_discovery_info();
            Ok(())
        }
    }
}

fn run_interactive(cli_config: InteractiveConfig) -> Result<()> {
    // CLI overrides beat the discovered configuration
    let config = match &cli_config.config_override {
        Some(path) => DefaultConfig::from_toml_file(path)?,
        None => ConfigDiscovery::discover_config()?,
    };
    let log_file = cli_config.log_file_override.or_else(|| config.log_file.clone());

    // The guard must outlive the session so file-logged lines are flushed
    let _guard = setup_logging(&config.log_level, log_file.as_deref());

    info!("starting schedule organizer");

    let mut store = TaskStore::new();
    if config.console_conflicts {
        store.add_sink(Box::new(ConsoleSink));
    }

    if cli_config.verbose {
        println!("Schedule organizer started. Conflicts are reported as tasks are added.");
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    menu::run(&mut store, &mut input, &mut output)?;

    info!("session ended");
    Ok(())
}
