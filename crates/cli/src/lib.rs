pub mod commands;

use std::path::Path;

use anyhow::{Context, Result};
use imodels_core::ProbeConfig;
use tracing_subscriber::EnvFilter;

/// Build the probe configuration from an optional JSON file plus CLI overrides.
///
/// Flags win over the file; the file wins over the build-time defaults.
pub fn resolve_probe_config(
    config_path: Option<&Path>,
    simulated: bool,
    simulator_var: Option<String>,
) -> Result<ProbeConfig> {
    let mut config = match config_path {
        Some(path) => ProbeConfig::from_json_file(path)
            .with_context(|| format!("Failed to load probe config from {}", path.display()))?,
        None => ProbeConfig::default(),
    };
    if simulated {
        config.simulated = Some(true);
    }
    if let Some(var) = simulator_var {
        config.simulator_variable = var;
    }
    Ok(config)
}

/// Install the stderr log subscriber, filtered by `RUST_LOG` (default `warn`).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
