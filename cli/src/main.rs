//! CLI entrypoint for diceconf
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use diceconf_application::BuildConfigUseCase;
use diceconf_domain::CONF_FILE_NAME;
use diceconf_infrastructure::FsConfigStore;
use diceconf_presentation::InteractiveConsole;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout stays a clean prompt transcript
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!("Starting diceconf");

    // === Dependency Injection ===
    let console = Arc::new(InteractiveConsole::new());
    let store = Arc::new(FsConfigStore::new(CONF_FILE_NAME));

    let use_case = BuildConfigUseCase::new(console, store);
    let output = use_case.execute()?;

    info!(
        "Wrote {} with {} rotation(s)",
        output.path.display(),
        output.rotations
    );

    Ok(())
}
